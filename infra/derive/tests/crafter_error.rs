#[test]
fn crafter_error_ui() {
    let t = trybuild::TestCases::new();
    t.pass("tests/ui/crafter_error_pass.rs");
}
