#[macro_export]
macro_rules! regex {
    ($pat:literal) => {{
        static RE: once_cell::sync::Lazy<regex::Regex> =
            once_cell::sync::Lazy::new(|| regex::Regex::new($pat).unwrap());
        &*RE
    }};
}

#[macro_export]
macro_rules! date_pattern {
    (
        name: $name:expr,
        matcher: $pat:literal,
        resolve: $resolver:expr
        $(,)?
    ) => {
        $crate::DatePattern { name: $name, matcher: $crate::regex!($pat), resolve: $resolver }
    };
}
