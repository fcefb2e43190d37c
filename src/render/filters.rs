//! MiniJinja filter and function registration.

use minijinja::Environment;

use crate::breakpoint::{BreakpointTable, Resolver};
use crate::util::{px_to_em, to_kebab_case};

/// Registers the built-in filters and functions on a minijinja environment.
///
/// - `{{ 24 | em }}` → `1.5`
/// - `{{ "fontSize" | kebab }}` → `font-size`
/// - `{{ breakpoint("tablet") }}` → the media query for `tablet` in `table`,
///   or an empty string when the breakpoint is unconditional
pub(crate) fn register_filters(env: &mut Environment<'static>, table: BreakpointTable) {
    env.add_filter("em", |px: f64| -> String { px_to_em(px) });

    env.add_filter("kebab", |name: String| -> String { to_kebab_case(&name) });

    let resolver = Resolver::new(table);
    env.add_function(
        "breakpoint",
        move |from: String, to: Option<String>| -> String {
            resolver
                .breakpoint(&from, to.as_deref())
                .media_query()
                .unwrap_or_default()
        },
    );
}
