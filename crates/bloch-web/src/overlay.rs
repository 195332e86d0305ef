use bloch_core::{basis_labels, label_transform, project_to_screen, BasisLabel};
use glam::Mat4;
use wasm_bindgen::JsCast;
use web_sys as web;

pub const CONTAINER_ID: &str = "labels-container";

/// HTML labels that track the sphere's basis states in screen space.
pub struct LabelOverlay {
    entries: Vec<(BasisLabel, web::HtmlElement)>,
}

impl LabelOverlay {
    /// Create one `div.label` per basis state inside `#labels-container`.
    pub fn create(document: &web::Document, radius: f32) -> anyhow::Result<Self> {
        let container = document
            .get_element_by_id(CONTAINER_ID)
            .ok_or_else(|| anyhow::anyhow!("missing #{CONTAINER_ID}"))?;
        let mut entries = Vec::with_capacity(6);
        for label in basis_labels(radius) {
            let div = document
                .create_element("div")
                .map_err(|e| anyhow::anyhow!("create_element: {:?}", e))?
                .dyn_into::<web::HtmlElement>()
                .map_err(|e| anyhow::anyhow!("{:?}", e))?;
            div.set_class_name("label");
            div.set_text_content(Some(label.text));
            container
                .append_child(&div)
                .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;
            entries.push((label, div));
        }
        Ok(Self { entries })
    }

    /// Reposition every label for the current camera. `width`/`height` are the
    /// canvas CSS size, which is the overlay's coordinate space.
    pub fn update(&self, view_proj: Mat4, width: f32, height: f32) {
        for (label, el) in &self.entries {
            let point = project_to_screen(label.anchor, view_proj, width, height);
            let style = el.style();
            let _ = style.set_property("transform", &label_transform(point));
            let _ = style.set_property(
                "visibility",
                if point.in_front { "visible" } else { "hidden" },
            );
        }
    }
}
