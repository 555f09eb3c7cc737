use super::*;

fn renderer() -> PetalIconRenderer {
    PetalIconRenderer::default()
}

#[test]
fn empty_tags_render_placeholder() {
    let empty: [&str; 0] = [];
    let svg = renderer().render(&empty, IconSize::DEFAULT);
    assert!(svg.contains(r#"viewBox="0 0 100 100""#));
    assert!(svg.contains(r##"<circle cx="50" cy="50" r="46" fill="#e2e8f0"/>"##));
    assert!(!svg.contains("linearGradient"));
}

#[test]
fn one_gradient_and_path_per_petal() {
    let svg = renderer().render(&["ocean", "climate", "soil"], IconSize::DEFAULT);
    assert_eq!(svg.matches("<linearGradient").count(), 3);
    assert_eq!(svg.matches("<path ").count(), 3);
    assert!(svg.contains(r#"transform="rotate(-35 0 78)""#));
    assert!(svg.contains(r#"transform="rotate(0 0 78)""#));
    assert!(svg.contains(r#"transform="rotate(35 0 78)""#));
    assert!(svg.contains(r#"aria-label="Tags: ocean, climate, soil""#));
    assert!(svg.contains(r#"<g transform="scale(0.82) translate(0,-4)">"#));
}

#[test]
fn gradients_carry_lightened_top_and_base_colors() {
    let svg = renderer().render(&["climate"], IconSize::DEFAULT);
    assert!(svg.contains(r##"stop-color="#d2e46d" stop-opacity="0.85""##));
    assert!(svg.contains(r##"stop-color="#c2db39" stop-opacity="0.05""##));
}

#[test]
fn gradient_ids_are_deterministic_by_default() {
    let r = renderer();
    let a = r.render(&["ab"], IconSize::DEFAULT);
    let b = r.render(&["ab"], IconSize::DEFAULT);
    assert_eq!(a, b);
    let expected = format!(r#"id="g_{}_0""#, 0x4d25_05ca_u32);
    assert!(a.contains(&expected));
}

#[test]
fn unique_ids_differ_per_render_but_colors_do_not() {
    let r = renderer().with_unique_ids(true);
    let a = r.render(&["ab"], IconSize::DEFAULT);
    let b = r.render(&["ab"], IconSize::DEFAULT);
    assert!(a.contains(r#"_0_0""#));
    assert!(b.contains(r#"_0_1""#));
    assert_ne!(a, b);
    assert_eq!(a.replace("_0_0", "_0_1"), b);
}

#[test]
fn tags_are_escaped_in_label() {
    let svg = renderer().render(&["a<b", "\"q\""], IconSize::DEFAULT);
    assert!(svg.contains("Tags: a&lt;b, &quot;q&quot;"));
}

#[test]
fn size_sets_width_and_height() {
    let svg = renderer().render(&["x"], IconSize::new(96).unwrap());
    assert!(svg.contains(r#"width="96" height="96""#));
}

#[test]
fn output_parses_as_svg() {
    let r = renderer();
    let tags = ["a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k"];
    parse_svg(r.render(&tags, IconSize::DEFAULT).as_bytes()).unwrap();
    let empty: [&str; 0] = [];
    parse_svg(r.render(&empty, IconSize::DEFAULT).as_bytes()).unwrap();
    assert!(parse_svg(b"<svg").is_err());
}

#[test]
fn placeholder_rasterizes_to_fill_color() {
    let svg = renderer().placeholder(IconSize::DEFAULT);
    let img = rasterize_svg(&svg, IconSize::DEFAULT).unwrap();
    assert_eq!(img.dimensions(), (48, 48));
    assert_eq!(img.get_pixel(24, 24).0, [0xe2, 0xe8, 0xf0, 0xff]);
    assert_eq!(img.get_pixel(0, 0).0[3], 0);
}

#[test]
fn petal_rasterizes_inside_the_icon() {
    let svg = renderer().render(&["climate"], IconSize::DEFAULT);
    let img = rasterize_svg(&svg, IconSize::DEFAULT).unwrap();
    assert!(img.get_pixel(24, 17).0[3] > 0);
    assert_eq!(img.get_pixel(0, 47).0[3], 0);
}

#[test]
fn demultiply_inverts_premultiplication() {
    let mut px = [64u8, 32, 0, 128, 10, 20, 30, 255, 9, 9, 9, 0];
    demultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[10, 20, 30, 255]);
    assert_eq!(&px[8..], &[9, 9, 9, 0]);
}
