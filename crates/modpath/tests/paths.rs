use modpath::{
    check_file_path, check_import_path, check_path, match_path_major, split_gopkg_in,
    split_path_version, ModuleError, PathKind, PathReason,
};

/// (path, valid module path, valid import path, valid file path)
const CHECK_PATH_CASES: &[(&str, bool, bool, bool)] = &[
    ("x.y/z", true, true, true),
    ("x.y", true, true, true),
    ("", false, false, false),
    ("/x.y/z", false, false, false),
    ("x./z", false, false, false),
    (".x/z", false, false, true),
    ("-x/z", false, true, true),
    ("x..y/z", false, false, false),
    ("x.y/z/../../w", false, false, false),
    ("x.y//z", false, false, false),
    ("x.y/z//w", false, false, false),
    ("x.y/z/", false, false, false),
    ("x.y/z/.", false, false, false),
    ("x.y/z/.a", false, false, true),
    ("x.y/z/v0", false, true, true),
    ("x.y/z/v1", false, true, true),
    ("x.y/z/v2", true, true, true),
    ("x.y/z/v2.0", false, true, true),
    ("x.y/z/v2.1.0", false, true, true),
    ("x.y/z/vabc", true, true, true),
    ("x.y/z/v2-unstable", true, true, true),
    ("X.y/z", false, true, true),
    ("a-b.c/z", true, true, true),
    ("a_b.c/z", false, true, true),
    ("!x.y/z", false, false, true),
    ("_x.y/z", false, true, true),
    ("x.y!/z", false, false, true),
    ("x.y\"/z", false, false, false),
    ("x.y#/z", false, false, true),
    ("x.y$/z", false, false, true),
    ("x.y%/z", false, false, true),
    ("x.y&/z", false, false, true),
    ("x.y'/z", false, false, false),
    ("x.y*/z", false, false, false),
    ("x.y:/z", false, false, false),
    ("x.y</z", false, false, false),
    ("x.y\\/z", false, false, false),
    ("x.y|/z", false, false, false),
    ("x.y/z~", true, true, true),
    ("x.y/z+", true, true, true),
    ("x.y/a b", false, false, true),
    ("x.y/z/α", false, false, true),
    ("x.y/z/1", true, true, true),
    ("x.y/z/٣", false, false, false),
    ("x.y/con", false, false, false),
    ("x.y/CON", false, false, false),
    ("x.y/con.foo", false, false, false),
    ("x.y/con.foo/bar", false, false, false),
    ("x.y/conn", true, true, true),
    ("x.y/com1", false, false, false),
    ("x.y/com0", true, true, true),
    ("x.y/lpt9.txt", false, false, false),
    ("x.y/nul", false, false, false),
    ("x.y/aux.go", false, false, false),
    ("x.y/prn", false, false, false),
    ("gopkg.in/yaml.v2", true, true, true),
    ("gopkg.in/yaml.v0", true, true, true),
    ("gopkg.in/yaml.v1", true, true, true),
    ("gopkg.in/yaml.v2-unstable", true, true, true),
    ("gopkg.in/yaml", false, true, true),
    ("gopkg.in/yaml.v01", false, true, true),
    ("gopkg.in/yaml.v2.1", false, true, true),
];

#[test]
fn path_checks_match_table() {
    for &(path, module_ok, import_ok, file_ok) in CHECK_PATH_CASES {
        assert_eq!(check_path(path).is_ok(), module_ok, "check_path({path:?})");
        assert_eq!(
            check_import_path(path).is_ok(),
            import_ok,
            "check_import_path({path:?})"
        );
        assert_eq!(
            check_file_path(path).is_ok(),
            file_ok,
            "check_file_path({path:?})"
        );
    }
}

#[test]
fn module_path_rule_is_stronger_than_import_path_rule() {
    for &(path, ..) in CHECK_PATH_CASES {
        if check_path(path).is_ok() {
            assert!(check_import_path(path).is_ok(), "{path:?}");
        }
        if check_import_path(path).is_ok() {
            assert!(check_file_path(path).is_ok(), "{path:?}");
        }
    }
}

fn reason_of(result: Result<(), ModuleError>) -> PathReason {
    result
        .expect_err("expected rejection")
        .reason()
        .cloned()
        .expect("path error carries a reason")
}

#[test]
fn rejections_report_first_rule_violated() {
    assert_eq!(
        reason_of(check_path("Example.com/pkg")),
        PathReason::InvalidCharInFirstElement('E')
    );
    assert_eq!(reason_of(check_import_path("a/../b")), PathReason::DoubleDot);
    assert_eq!(
        reason_of(check_file_path("a/CON.txt")),
        PathReason::ReservedName("CON".into())
    );
    assert_eq!(
        reason_of(check_path("example.com/pkg/v1")),
        PathReason::InvalidVersionSuffix
    );
    assert_eq!(
        reason_of(check_path("xy/z")),
        PathReason::MissingDotInFirstElement
    );
    assert_eq!(reason_of(check_path("-x.y/z")), PathReason::LeadingDash);
    assert_eq!(reason_of(check_import_path("")), PathReason::EmptyString);
    assert_eq!(reason_of(check_import_path("a//b")), PathReason::DoubleSlash);
    assert_eq!(reason_of(check_import_path("a/b/")), PathReason::TrailingSlash);
    assert_eq!(reason_of(check_import_path("/a")), PathReason::EmptyElement);
    assert_eq!(reason_of(check_import_path("a/.b")), PathReason::LeadingDot);
    assert_eq!(reason_of(check_file_path("a/b.")), PathReason::TrailingDot);
    assert_eq!(
        reason_of(check_file_path("a/.")),
        PathReason::InvalidElement(".".into())
    );
    assert_eq!(reason_of(check_import_path("a/b c")), PathReason::InvalidChar(' '));
}

#[test]
fn errors_name_dialect_and_input() {
    let err = check_path("X.y/z").unwrap_err();
    assert_eq!(
        err,
        ModuleError::MalformedPath {
            kind: PathKind::Module,
            path: "X.y/z".into(),
            reason: PathReason::InvalidCharInFirstElement('X'),
        }
    );
    assert_eq!(
        err.to_string(),
        r#"malformed module path "X.y/z": invalid char 'X' in first path element"#
    );
    assert_eq!(
        check_import_path("a/nul").unwrap_err().to_string(),
        r#"malformed import path "a/nul": "nul" disallowed as path element component on Windows"#
    );
    assert_eq!(
        check_file_path("a/b?").unwrap_err().to_string(),
        r#"malformed file path "a/b?": invalid char '?'"#
    );
}

#[test]
fn split_path_version_separates_major_suffix() {
    let cases: &[(&str, Option<(&str, &str)>)] = &[
        ("example.com/pkg/v2", Some(("example.com/pkg", "/v2"))),
        ("example.com/pkg/v10", Some(("example.com/pkg", "/v10"))),
        ("example.com/pkg", Some(("example.com/pkg", ""))),
        ("example.com/pkg/vabc", Some(("example.com/pkg/vabc", ""))),
        ("example.com/pkg/v", Some(("example.com/pkg/v", ""))),
        ("example.com/pkgv2", Some(("example.com/pkgv2", ""))),
        ("example.com/pkg/v1", None),
        ("example.com/pkg/v0", None),
        ("example.com/pkg/v02", None),
        ("example.com/pkg/v2.0", None),
        ("example.com/pkg/v2.", None),
        ("gopkg.in/yaml.v2", Some(("gopkg.in/yaml", ".v2"))),
        ("gopkg.in/yaml.v0", Some(("gopkg.in/yaml", ".v0"))),
        ("gopkg.in/yaml.v2-unstable", Some(("gopkg.in/yaml", ".v2-unstable"))),
        ("gopkg.in/yaml", None),
        ("gopkg.in/yaml.v01", None),
        ("gopkg.in/yaml/v2", None),
    ];
    for &(path, want) in cases {
        assert_eq!(split_path_version(path), want, "split_path_version({path:?})");
    }
}

#[test]
fn split_gopkg_in_requires_legacy_prefix() {
    assert_eq!(split_gopkg_in("example.com/yaml.v2"), None);
    assert_eq!(
        split_gopkg_in("gopkg.in/check.v1"),
        Some(("gopkg.in/check", ".v1"))
    );
}

#[test]
fn match_path_major_table() {
    let cases: &[(&str, &str, bool)] = &[
        ("v0.0.0", "", true),
        ("v1.0.0", "", true),
        ("v1.2", "", true),
        ("v2.0.0", "", false),
        ("v2.0.0+incompatible", "", true),
        ("v2.0.0+other", "", false),
        ("v2.0.0", "/v2", true),
        ("v2.3.4-pre", "/v2", true),
        ("v3.0.0", "/v2", false),
        ("v2.0.0", ".v2", true),
        ("v2.0.0", ".v2-unstable", true),
        ("v1.0.0", ".v1", true),
        ("v0.0.0-20161208181325-20d25e280405", ".v1", true),
        ("v0.0.0-20161208181325-20d25e280405", ".v2", false),
        ("v0.1.0", ".v0", true),
        ("bad", "", false),
        ("bad", "/v2", false),
    ];
    for &(v, path_major, want) in cases {
        assert_eq!(
            match_path_major(v, path_major),
            want,
            "match_path_major({v:?}, {path_major:?})"
        );
    }
}
