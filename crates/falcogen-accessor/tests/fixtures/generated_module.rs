// Code generated by falcogen; DO NOT EDIT.
// This file was generated at 2024-05-01T12:00:00Z

pub mod fixtures {
    #![allow(non_upper_case_globals)]

    pub static Rules: ::falcogen_accessor::FileAccessor =
        ::falcogen_accessor::FileAccessor::inline(
            "rules.yaml",
            r##"- rule: "spawned shell"
  output: "#{proc.name}"# ok
"##,
        );

    pub static Banner: ::falcogen_accessor::FileAccessor =
        ::falcogen_accessor::FileAccessor::inline(
            "banner.txt",
            r##########################"banner: "#########################"
"##########################,
        );

    pub static Windows: ::falcogen_accessor::FileAccessor =
        ::falcogen_accessor::FileAccessor::inline(
            "windows.ini",
            "line one\r\nline two\r\n",
        );

    pub static Unicode: ::falcogen_accessor::FileAccessor =
        ::falcogen_accessor::FileAccessor::inline(
            "unicode.txt",
            r#"größe: 5 µs → ✓
日本語のルール
"#,
        );

    pub static Trace: ::falcogen_accessor::FileAccessor =
        ::falcogen_accessor::FileAccessor::local(
            "trace.scap",
            "/nonexistent/falcogen/trace.scap",
        );
}
