use serial_test::serial;
use styled_breakpoint::{
    create_resolver, px_to_em, reset_diagnostic_sink, set_diagnostic_sink, themed,
    BreakpointTable, Context, MemorySink, Renderer, Resolver, StyleContent, StyleObject,
    Template, Theme,
};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn defaults() -> BreakpointTable {
    BreakpointTable::defaults()
}

fn min_query(name: &str) -> String {
    let px = defaults().get(name).unwrap();
    format!("screen and (min-width:{}em)", px_to_em(px))
}

fn between_query(from: &str, to: &str) -> String {
    let table = defaults();
    format!(
        "screen and (min-width:{}em) and (max-width:{}em)",
        px_to_em(table.get(from).unwrap()),
        px_to_em(table.get(to).unwrap() - 1.0)
    )
}

fn render(content: impl Into<StyleContent>) -> String {
    Renderer::new(Theme::new())
        .render(&content.into())
        .unwrap()
}

#[test]
fn test_styles_from_each_breakpoint() {
    let breakpoint = create_resolver(defaults());
    let content = Template::new()
        .content(breakpoint.up("mobile").apply("font-size: 12px;"))
        .content(breakpoint.up("tablet").apply("font-size: 16px;"))
        .content(breakpoint.up("desktop").apply("font-size: 24px;"));

    let css = render(content);
    assert_eq!(
        css,
        format!(
            "font-size: 12px;@media {} {{font-size: 16px;}}@media {} {{font-size: 24px;}}",
            min_query("tablet"),
            min_query("desktop")
        )
    );
    assert!(css.contains("@media screen and (min-width:46.0625em) {font-size: 16px;}"));
    assert!(css.contains("@media screen and (min-width:74.6875em) {font-size: 24px;}"));
}

#[test]
fn test_styles_between_breakpoints() {
    let breakpoint = create_resolver(defaults());
    let content = Template::new()
        .content(breakpoint.between("mobile", "tablet").apply("font-size: 12px;"))
        .content(breakpoint.between("tablet", "desktop").apply("font-size: 16px;"))
        .content(breakpoint.up("desktop").apply("font-size: 24px;"));

    let css = render(content);
    assert!(css.contains(&format!(
        "@media {} {{font-size: 12px;}}",
        between_query("mobile", "tablet")
    )));
    assert!(css.contains(&format!(
        "@media {} {{font-size: 16px;}}",
        between_query("tablet", "desktop")
    )));
    assert!(css.contains(&format!("@media {} {{font-size: 24px;}}", min_query("desktop"))));
    assert!(css.contains("(min-width:0em) and (max-width:46em)"));
}

#[test]
#[serial]
fn test_unknown_breakpoint_warns_through_global_sink() {
    init_logging();
    let sink = MemorySink::new();
    set_diagnostic_sink(sink.clone());

    let breakpoint = create_resolver(defaults());
    let content = breakpoint.up("foobar").apply("font-size: 12px;");
    let css = render(content);

    reset_diagnostic_sink();

    assert_eq!(
        sink.messages(),
        vec![r#"styled-components-breakpoint: Breakpoint "foobar" was not found."#]
    );
    assert_eq!(css, "font-size: 12px;");
}

#[test]
#[serial]
fn test_unknown_breakpoint_with_default_sink_does_not_fail() {
    init_logging();
    reset_diagnostic_sink();
    let breakpoint = create_resolver(defaults());
    let css = render(breakpoint.between("foobar", "desktop").apply("a:b;"));
    assert_eq!(css, "@media screen and (max-width:74.625em) {a:b;}");
}

#[test]
fn test_styles_from_style_objects() {
    let breakpoint = create_resolver(defaults());
    let content = Template::new()
        .content(breakpoint.up("mobile").apply(StyleObject::new().set("fontSize", "12px")))
        .content(breakpoint.up("tablet").apply(StyleObject::new().set("fontSize", "16px")))
        .content(breakpoint.up("desktop").apply(StyleObject::new().set("fontSize", "24px")));

    let css = render(content);
    assert_eq!(
        css,
        format!(
            "font-size:12px;@media {}{{font-size:16px;}}@media {}{{font-size:24px;}}",
            min_query("tablet"),
            min_query("desktop")
        )
    );
}

#[test]
fn test_style_object_shape() {
    let breakpoint = create_resolver(
        BreakpointTable::new()
            .add("mobile", 0.0)
            .add("tablet", 768.0)
            .add("desktop", 1024.0),
    );

    let wrapped = breakpoint
        .up("tablet")
        .apply(StyleObject::new().set("fontSize", "12px"));

    assert_eq!(
        wrapped,
        StyleContent::Object(StyleObject::new().media(
            "screen and (min-width:48em)",
            StyleObject::new().set("fontSize", "12px"),
        ))
    );
}

#[test]
fn test_styles_from_nested_functions() {
    fn color(fallback: &'static str) -> Template {
        Template::new().function(move |ctx: &Context<'_>| {
            let value = ctx.theme().get_str("value").unwrap_or(fallback);
            format!("color: {};", value).into()
        })
    }

    let breakpoint = create_resolver(defaults());
    let content = Template::new()
        .content(breakpoint.up("mobile").apply(color("red")))
        .content(breakpoint.up("tablet").apply(color("green")))
        .content(breakpoint.up("desktop").apply(color("blue")));

    let css = render(content.clone());
    assert_eq!(
        css,
        format!(
            "color: red;@media {} {{color: green;}}@media {} {{color: blue;}}",
            min_query("tablet"),
            min_query("desktop")
        )
    );

    let themed_css = Renderer::new(Theme::new().add("value", "orange"))
        .render(&content.into())
        .unwrap();
    assert!(!themed_css.contains("red"));
    assert_eq!(themed_css.matches("color: orange;").count(), 3);
}

#[test]
fn test_themed_breakpoints_follow_theme() {
    let content: StyleContent = Template::new()
        .content(themed::up("tablet").apply("a:1;"))
        .content(themed::between("mobile", "tablet").apply("b:2;"))
        .into();

    let with_defaults = Renderer::new(Theme::new()).render(&content).unwrap();
    assert_eq!(
        with_defaults,
        "@media screen and (min-width:46.0625em) {a:1;}\
         @media screen and (min-width:0em) and (max-width:46em) {b:2;}"
    );

    let theme = Theme::new().with_breakpoints(
        BreakpointTable::new()
            .add("mobile", 0.0)
            .add("tablet", 768.0),
    );
    let with_theme = Renderer::new(theme).render(&content).unwrap();
    assert_eq!(
        with_theme,
        "@media screen and (min-width:48em) {a:1;}\
         @media screen and (min-width:0em) and (max-width:47.9375em) {b:2;}"
    );
}

#[test]
fn test_breakpoint_function_in_expressions() {
    let renderer = Renderer::new(
        Theme::new().with_breakpoints(BreakpointTable::new().add("tablet", 768.0)),
    );
    let content = Template::new()
        .text("@media ")
        .expr(r#"breakpoint("tablet")"#)
        .text(" {margin: ")
        .expr("32 | em")
        .text("em;}");

    assert_eq!(
        renderer.render(&content.into()).unwrap(),
        "@media screen and (min-width:48em) {margin: 2em;}"
    );
}

#[test]
fn test_resolution_is_pure() {
    let a = Resolver::new(defaults());
    let b = Resolver::new(defaults());
    let pairs: [(&str, Option<&str>); 4] = [
        ("mobile", None),
        ("tablet", None),
        ("mobile", Some("tablet")),
        ("tablet", Some("desktop")),
    ];
    for (from, to) in pairs {
        assert_eq!(
            a.breakpoint(from, to).media_query(),
            b.breakpoint(from, to).media_query()
        );
        assert_eq!(
            a.breakpoint(from, to).media_query(),
            a.breakpoint(from, to).media_query()
        );
    }
}
