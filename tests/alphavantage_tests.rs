use stockalert::services::alphavantage::parse_earnings_csv;

#[test]
fn parses_the_standard_header_layout() {
    let csv = "symbol,name,reportDate,fiscalDateEnding,estimate,currency\n\
               AAPL,Apple Inc,2025-08-12,2025-06-30,1.42,USD\n\
               MSFT,Microsoft Corp,2025-08-19,2025-06-30,2.95,USD\n";

    let events = parse_earnings_csv(csv);
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].symbol, "AAPL");
    assert_eq!(events[0].report_date, "2025-08-12");
    assert_eq!(events[0].estimate, "1.42");
    assert_eq!(events[1].symbol, "MSFT");
}

#[test]
fn locates_columns_by_header_name() {
    // same data, reordered columns
    let csv = "reportDate,symbol,estimate\n\
               2025-08-12,AAPL,1.42\n";

    let events = parse_earnings_csv(csv);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].symbol, "AAPL");
    assert_eq!(events[0].report_date, "2025-08-12");
}

#[test]
fn empty_estimate_becomes_na() {
    let csv = "symbol,name,reportDate,fiscalDateEnding,estimate,currency\n\
               AAPL,Apple Inc,2025-08-12,2025-06-30,,USD\n";

    let events = parse_earnings_csv(csv);
    assert_eq!(events[0].estimate, "N/A");
}

#[test]
fn short_and_blank_rows_are_skipped() {
    let csv = "symbol,name,reportDate,fiscalDateEnding,estimate,currency\n\
               AAPL,Apple Inc\n\
               \n\
               MSFT,Microsoft Corp,2025-08-19,2025-06-30,2.95,USD\n";

    let events = parse_earnings_csv(csv);
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].symbol, "MSFT");
}

#[test]
fn missing_required_headers_yield_nothing() {
    assert!(parse_earnings_csv("").is_empty());
    assert!(parse_earnings_csv("foo,bar\n1,2\n").is_empty());
}
