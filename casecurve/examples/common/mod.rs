/// A short excerpt in the case-log format, including a same-day correction
/// and a reference published the day after it reports on.
pub const SAMPLE_LOG: &str = r#"[
  ["2020-03-02", 3, 3, 0, 0, "2020-03-02 14:30", "https://example.org/press/0302", ""],
  ["2020-03-03", 3, 3, 0, 0, "2020-03-03 10:00", "https://example.org/press/0303", ""],
  ["2020-03-04", 25, 3, 0, 0, "2020-03-04 12:00", "https://example.org/press/0304", ""],
  ["2020-03-05", 27, 3, 0, 0, "2020-03-05 18:00", "https://example.org/press/0305", ""],
  ["2020-03-06", 28, 3, 0, 0, "2020-03-06 17:00", "https://example.org/press/0306a", ""],
  ["2020-03-06", 28, 3, 0, 0, "2020-03-06 21:00", "https://example.org/press/0306b", "evening update"],
  ["2020-03-07", 31, 3, 0, 0, "2020-03-08 09:00", "https://example.org/press/0307", "published late"],
  ["2020-03-09", 40, 3, 0, 0, "2020-03-09 18:00", "https://example.org/press/0309", ""],
  ["2020-03-10", 47, 3, 0, 0, "2020-03-10 18:00", "https://example.org/press/0310", ""],
  ["2020-03-11", 59, 3, 0, 0, "2020-03-11 18:00", "https://example.org/press/0311", ""],
  ["2020-03-12", 69, 4, 1, 0, "2020-03-12 17:00", "https://example.org/press/0312", ""],
  ["2020-03-13", 71, 10, 2, 0, "2020-03-13 18:00", "https://example.org/press/0313", ""],
  ["2020-03-14", 89, 10, 2, 0, "2020-03-14 18:00", "https://example.org/press/0314", ""],
  ["2020-03-15", 97, 13, 2, 0, "2020-03-15 18:00", "https://example.org/press/0315", ""],
  ["2020-03-16", 99, 13, 2, 0, "2020-03-16 18:00", "https://example.org/press/0316", ""]
]"#;
