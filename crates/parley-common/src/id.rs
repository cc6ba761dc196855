/// Short hex id used to correlate log lines for one inbound request.
///
/// Eight characters is plenty to tell concurrent requests apart in a log
/// stream; it is not meant to be globally unique.
pub fn new_correlation_id() -> String {
    let uuid = uuid::Uuid::new_v4();
    uuid.as_bytes()[..4]
        .iter()
        .map(|b| format!("{b:02x}"))
        .collect()
}
