use super::*;

#[test]
fn millis_convert_to_utc_datetime() {
    let dt = datetime_from_millis(1_767_601_800_000.0);
    assert_eq!(dt.unix_timestamp(), 1_767_601_800);
    assert_eq!(dt.offset(), time::UtcOffset::UTC);
}

#[test]
fn sub_second_millis_are_kept() {
    let dt = datetime_from_millis(1_500.0);
    assert_eq!(dt.unix_timestamp(), 1);
    assert_eq!(dt.millisecond(), 500);
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn server_side_helpers_are_inert() {
    assert_eq!(document_cookie(), None);
    assert_eq!(current_path(), None);
    assert!(!confirm("Delete?"));
    assert!(download_bytes("x.xlsx", b"data").is_err());
}
