//! Reusable test content

/// Fake compiler: appends its argument to `$JWATCH_TEST_LOG`, drops a
/// `.class` file next to the source, and fails for any file whose name
/// starts with `Broken`, exiting with status 3.
pub const FAKE_COMPILER: &str = r#"#!/bin/sh
echo "$1" >> "$JWATCH_TEST_LOG"
case "$1" in
  Broken*)
    echo "$1:1: error: class, interface, enum, or record expected" >&2
    exit 3
    ;;
esac
: > "${1%.*}.class"
exit 0
"#;

/// A Java class that compiles
pub const HELLO_JAVA: &str = r#"public class Hello {
    public static void main(String[] args) {
        System.out.println("hello");
    }
}
"#;
