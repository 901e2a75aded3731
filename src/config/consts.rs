// src/config/consts.rs

// Manual documentation: accepted header rows, in column order
pub const MANUAL_HEADERS: [[&str; 4]; 2] = [
    ["Method", "Returns", "Signature", "Description"],
    ["Method", "Return Type", "Signature(s)", "Description"],
];

// Generated documentation: class token marking member-declaration tables
pub const MEMBER_DECLS_CLASS: &str = "memberdecls";

// Process exit codes
pub const EXIT_OK: i32 = 0;
pub const EXIT_FAIL: i32 = 1;

pub const USAGE: &str = "\
Usage: compare_signatures [-v|--verbose] <manual_doc_html_path> <doxygen_html_path>

Checks that every method in the generated member-declaration tables is documented
in the manual reference table with a matching return type and signature.

Options:
  -v, --verbose   debug logging on stderr
  -h, --help      show this help";
