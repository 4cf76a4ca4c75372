//! The viewer document.
//!
//! DESIGN
//! ======
//! The page is assembled once at startup and served unchanged. Control ids,
//! shape options and slider bounds all come from the `scene` crate's tables,
//! so the markup always matches what the engine's dispatch table accepts. The
//! inline module script only wires DOM events into `scene::Engine` and drives
//! `requestAnimationFrame`; all view state lives in the engine.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use scene::color::Color;
use scene::controls::{ControlId, SliderRange};
use scene::shape::ShapeKind;

/// CDN build of three.js the engine's bindings target.
pub const THREE_JS_URL: &str = "https://cdnjs.cloudflare.com/ajax/libs/three.js/r128/three.min.js";

/// Mount point of the wasm-pack bundle.
pub const PKG_PREFIX: &str = "/pkg";

/// Options that change the generated document.
#[derive(Debug, Clone, Copy, Default)]
pub struct PageOptions {
    /// Show engine start-up failures in an on-page panel, not just the console.
    pub dev: bool,
}

const STYLE: &str = r"
    body {
        margin: 0;
        overflow: hidden;
        background: linear-gradient(135deg, #1e1e2f, #111118);
        font-family: Arial, sans-serif;
    }
    #ui {
        position: absolute;
        top: 20px;
        left: 20px;
        background: rgba(255,255,255,0.12);
        padding: 20px;
        border-radius: 12px;
        width: 230px;
        color: white;
        backdrop-filter: blur(10px);
    }
    label { margin-top: 12px; display: block; }
    select, input[type=color], input[type=range] {
        width: 100%;
        padding: 6px;
        margin-top: 5px;
        border-radius: 6px;
        border: none;
        outline: none;
    }
    #error {
        position: absolute;
        bottom: 20px;
        left: 20px;
        right: 20px;
        margin: 0;
        padding: 12px;
        border-radius: 8px;
        background: rgba(180,30,30,0.9);
        color: white;
        white-space: pre-wrap;
    }
";

/// Render the full HTML document.
#[must_use]
pub fn render(options: PageOptions) -> String {
    let controls = ControlId::ALL.into_iter().map(control_markup).collect::<Vec<_>>().join("\n");
    let script = host_script(options);
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="UTF-8">
<title>Rust + Three.js 3D Shapes</title>
<style>{STYLE}</style>
<script src="{THREE_JS_URL}"></script>
</head>
<body>
<div id="ui">
<h2>3D Shape Controls</h2>
{controls}
</div>
<pre id="error" hidden></pre>
<script type="module">
{script}
</script>
</body>
</html>
"#
    )
}

fn control_markup(control: ControlId) -> String {
    let id = control.dom_id();
    let label = control.label();
    let widget = match control {
        ControlId::ShapeSelector => {
            let options = ShapeKind::ALL
                .into_iter()
                .map(|shape| format!(r#"    <option value="{}">{}</option>"#, shape.id(), shape.label()))
                .collect::<Vec<_>>()
                .join("\n");
            format!("<select id=\"{id}\">\n{options}\n</select>")
        }
        ControlId::ColorPicker => format!(r#"<input type="color" id="{id}" value="{}">"#, Color::default()),
        ControlId::ZoomSlider | ControlId::SpeedSlider => match control.slider() {
            Some(range) => slider_markup(id, range),
            None => String::new(),
        },
    };
    format!("<label for=\"{id}\">{label}</label>\n{widget}")
}

fn slider_markup(id: &str, range: SliderRange) -> String {
    let step = range.step.map(|s| format!(r#" step="{s}""#)).unwrap_or_default();
    format!(
        r#"<input type="range" id="{id}" min="{}" max="{}"{step} value="{}">"#,
        range.min, range.max, range.initial
    )
}

/// The inline ES module that boots the engine and forwards events.
fn host_script(options: PageOptions) -> String {
    let bindings = ControlId::ALL
        .into_iter()
        .map(|c| format!(r#"["{}", "{}"]"#, c.dom_id(), c.dom_event()))
        .collect::<Vec<_>>()
        .join(", ");
    let dev = options.dev;
    format!(
        r##"import init, {{ Engine }} from "{PKG_PREFIX}/scene.js";

const DEV = {dev};
const CONTROLS = [{bindings}];

function showError(err) {{
    console.error(err);
    if (!DEV) return;
    const panel = document.getElementById("error");
    panel.textContent = err && err.stack ? err.stack : String(err);
    panel.hidden = false;
}}

try {{
    await init();
    const engine = new Engine(document.body, window.innerWidth, window.innerHeight);

    for (const [id, event] of CONTROLS) {{
        document.getElementById(id).addEventListener(event, (e) => {{
            try {{
                engine.on_control(id, e.target.value);
            }} catch (err) {{
                console.warn(err);
            }}
        }});
    }}

    document.addEventListener("mousedown", (e) => {{
        if (e.target.closest("#ui")) return;
        engine.on_pointer_down(e.clientX, e.clientY);
    }});
    document.addEventListener("mousemove", (e) => engine.on_pointer_move(e.clientX, e.clientY));
    document.addEventListener("mouseup", () => engine.on_pointer_up());
    window.addEventListener("resize", () => engine.resize(window.innerWidth, window.innerHeight));

    const animate = () => {{
        try {{
            engine.frame();
        }} catch (err) {{
            showError(err);
            return;
        }}
        requestAnimationFrame(animate);
    }};
    requestAnimationFrame(animate);
}} catch (err) {{
    showError(err);
}}"##
    )
}
