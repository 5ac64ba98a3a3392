use framecast_common::{classify, selector, ImageMap};
use framecast_scenegraph::{NodeKind, SceneNode};

/// TEXT nodes at or above this font size render as headings.
const HEADING_MIN_FONT_SIZE: f64 = 32.0;

/// Options for HTML generation
#[derive(Debug, Clone)]
pub struct CompileOptions {
    /// Relative path written into the stylesheet link
    pub stylesheet_href: String,
    /// Indentation string
    pub indent: String,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            stylesheet_href: "styles.css".to_string(),
            indent: "  ".to_string(),
        }
    }
}

struct Context {
    options: CompileOptions,
    depth: usize,
    buffer: String,
}

impl Context {
    fn new(options: CompileOptions) -> Self {
        Self {
            options,
            depth: 0,
            buffer: String::new(),
        }
    }

    fn add_line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push_str(&self.options.indent);
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    fn indent(&mut self) {
        self.depth += 1;
    }

    fn dedent(&mut self) {
        if self.depth > 0 {
            self.depth -= 1;
        }
    }

    fn get_output(self) -> String {
        self.buffer
    }
}

/// Compile a scene tree to a complete, self-contained HTML document.
///
/// Every visible node contributes exactly one element tagged with the class
/// derived from its id, pairing it with the style compiler's rule for the
/// same node. The root frame renders at its authored pixel size inside a
/// canvas wrapper that an inline script scales to fit the viewport.
pub fn compile_to_html(root: &SceneNode, images: &ImageMap, options: CompileOptions) -> String {
    let mut ctx = Context::new(options);

    ctx.add_line("<!DOCTYPE html>");
    ctx.add_line("<html>");
    ctx.indent();

    compile_head(root, &mut ctx);

    ctx.add_line("<body>");
    ctx.indent();

    let canvas_open = format!("<div class=\"{}\">", selector::CANVAS_CLASS);
    ctx.add_line(&canvas_open);
    ctx.indent();
    compile_node(root, images, &mut ctx);
    ctx.dedent();
    ctx.add_line("</div>");

    compile_scaling_script(root, &mut ctx);

    ctx.dedent();
    ctx.add_line("</body>");
    ctx.dedent();
    ctx.add_line("</html>");

    ctx.get_output()
}

fn compile_head(root: &SceneNode, ctx: &mut Context) {
    ctx.add_line("<head>");
    ctx.indent();

    ctx.add_line("<meta charset=\"UTF-8\">");
    ctx.add_line("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">");

    let title = format!("<title>{}</title>", escape_html(&root.name));
    ctx.add_line(&title);

    let link = format!(
        "<link rel=\"stylesheet\" href=\"{}\">",
        escape_html(&ctx.options.stylesheet_href)
    );
    ctx.add_line(&link);

    ctx.dedent();
    ctx.add_line("</head>");
}

fn compile_node(node: &SceneNode, images: &ImageMap, ctx: &mut Context) {
    if !node.is_visible() {
        return;
    }

    let class = selector::class_name(&node.id);

    if let Some(url) = images.get(&node.id) {
        if classify::should_collapse_to_single_image(node) {
            // Whole icon-like subtree flattened into one image; the style
            // compiler emits the matching background-image rule.
            let element = format!("<div class=\"{}\"></div>", class);
            ctx.add_line(&element);
            return;
        }
        if classify::is_vector_like(node.kind) || !node.has_visible_children() {
            let element = format!(
                "<img class=\"{}\" src=\"{}\" alt=\"\"/>",
                class,
                escape_html(url)
            );
            ctx.add_line(&element);
            return;
        }
    }

    let tag = element_tag(node);
    let open = format!("<{} class=\"{}\">", tag, class);
    ctx.add_line(&open);
    ctx.indent();

    if node.kind == NodeKind::Text {
        if let Some(characters) = &node.characters {
            ctx.add_line(&text_content(characters));
        }
    }

    for child in node.visible_children() {
        compile_node(child, images, ctx);
    }

    ctx.dedent();
    let close = format!("</{}>", tag);
    ctx.add_line(&close);
}

fn element_tag(node: &SceneNode) -> &'static str {
    if node.kind != NodeKind::Text {
        return "div";
    }
    let font_size = node
        .style
        .as_ref()
        .and_then(|style| style.font_size)
        .unwrap_or(0.0);
    if font_size >= HEADING_MIN_FONT_SIZE {
        "h1"
    } else {
        "p"
    }
}

fn text_content(characters: &str) -> String {
    escape_html(characters).replace('\n', "<br/>")
}

fn compile_scaling_script(root: &SceneNode, ctx: &mut Context) {
    let design_width = root
        .absolute_bounding_box
        .map(|bbox| bbox.width.round())
        .unwrap_or(0.0);

    ctx.add_line("<script>");
    ctx.indent();
    ctx.add_line("(function () {");
    ctx.indent();

    let width_line = format!("var designWidth = {};", design_width);
    ctx.add_line(&width_line);
    let canvas_line = format!(
        "var canvas = document.querySelector(\".{}\");",
        selector::CANVAS_CLASS
    );
    ctx.add_line(&canvas_line);
    ctx.add_line("if (!canvas || designWidth <= 0) { return; }");
    ctx.add_line("function fit() {");
    ctx.indent();
    ctx.add_line("var scale = Math.min(1, window.innerWidth / designWidth);");
    ctx.add_line("canvas.style.transform = \"scale(\" + scale + \")\";");
    ctx.dedent();
    ctx.add_line("}");
    ctx.add_line("window.addEventListener(\"resize\", fit);");
    ctx.add_line("fit();");

    ctx.dedent();
    ctx.add_line("})();");
    ctx.dedent();
    ctx.add_line("</script>");
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
