//! Unit tests for configuration helpers

use stockwatch::config::parse_ticker_list;
use stockwatch::logging::LogFormat;

#[test]
fn test_parse_ticker_list() {
    assert_eq!(parse_ticker_list(" ionq, MSFT ,,lmt "), vec!["IONQ", "MSFT", "LMT"]);
    assert!(parse_ticker_list(" , ").is_empty());
}

#[test]
fn test_log_format_for_environment() {
    assert_eq!(LogFormat::for_environment("production"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("PROD"), LogFormat::Json);
    assert_eq!(LogFormat::for_environment("sandbox"), LogFormat::Pretty);
}
