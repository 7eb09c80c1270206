//! Conditional class-list composition.

/// Joins the tokens whose condition holds into one space-separated class list.
///
/// Fragments keep their input order. A fragment is dropped when its condition
/// is false or its token is blank, so the result never carries leading,
/// trailing, or doubled separators.
///
/// ```
/// use system_ui::compose_classes;
///
/// let class = compose_classes([
///     (true, "storybook-card"),
///     (true, "storybook-card--outlined"),
///     (false, "storybook-card--clickable"),
/// ]);
/// assert_eq!(class, "storybook-card storybook-card--outlined");
/// ```
pub fn compose_classes<I, S>(fragments: I) -> String
where
    I: IntoIterator<Item = (bool, S)>,
    S: AsRef<str>,
{
    let mut class = String::new();
    for (enabled, token) in fragments {
        let token = token.as_ref().trim();
        if !enabled || token.is_empty() {
            continue;
        }
        if !class.is_empty() {
            class.push(' ');
        }
        class.push_str(token);
    }
    class
}
