use vv_logger::{Logger, LoggerError, level_for_verbosity};

#[test]
fn second_logger_reports_installed_subscriber() -> Result<(), Box<dyn std::error::Error>> {
    let tmp_dir = tempfile::tempdir()?;

    let console = Logger::builder().name("vvlink").level(level_for_verbosity(1)).init()?;
    assert!(!console.writes_files());

    let err = Logger::builder()
        .name("vvlink")
        .console(false)
        .directory(tmp_dir.path().join("logs"))
        .json(true)
        .init()
        .expect_err("a subscriber is already installed");

    assert!(matches!(err, LoggerError::Subscriber { context: Some(_), .. }));
    assert!(
        err.to_string().contains("A global subscriber is already installed"),
        "unexpected error: {err}"
    );
    Ok(())
}
