/// Subjects shown on the hub, in tab order.
pub const SUBJECT_ORDER: [&str; 3] = ["물리", "화학", "생물"];

/// Display label for a subject category; unknown categories are shown as-is.
pub fn subject_label(subject: &str) -> &str {
    match subject {
        "물리" => "물리학",
        "화학" => "화학",
        "생물" => "생명과학",
        other => other,
    }
}
