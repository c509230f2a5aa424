use crate::core::{ModulationFlags, Param, Settings};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct ParamControl {
    pub param: Param,
    pub label: web::Element,
    pub toggle: web::Element,
    pub slider: web::HtmlInputElement,
}

/// Sliders, per-parameter modulation toggles, modulate-all and export.
///
/// The panel holds no state of its own; `sync` repaints it from the scene.
pub struct ControlPanel {
    pub controls: Vec<ParamControl>,
    pub modulate_all: web::Element,
    pub export: web::Element,
}

impl ControlPanel {
    /// Build the panel inside the element with id `root_id`.
    pub fn build(document: &web::Document, root_id: &str) -> anyhow::Result<Self> {
        let root = document
            .get_element_by_id(root_id)
            .ok_or_else(|| anyhow::anyhow!("missing #{}", root_id))?;
        _ = root.class_list().add_1("controls-panel");
        root.set_inner_html("");

        let header = dom::create_with_class(document, "div", "controls-header")?;
        let title = dom::create_with_class(document, "h3", "controls-title")?;
        title.set_text_content(Some("Background Controls"));
        let export = dom::create_with_class(document, "button", "export-button")?;
        export.set_text_content(Some("Export Settings"));
        _ = export.set_attribute("title", "Copy a shareable URL with current settings");
        let modulate_all = dom::create_with_class(document, "button", "modulate-all-button")?;
        append_all(&header, &[&title, &export, &modulate_all])?;

        let grid = dom::create_with_class(document, "div", "controls-grid")?;
        let mut controls = Vec::with_capacity(Param::ALL.len());
        for param in Param::ALL {
            let control = build_control(document, param)?;
            let row = dom::create_with_class(document, "div", "control-row")?;
            let row_header = dom::create_with_class(document, "div", "control-row-header")?;
            append_all(&row_header, &[&control.label, &control.toggle])?;
            let slider_el: &web::Element = &control.slider;
            append_all(&row, &[&row_header, slider_el])?;
            append_all(&grid, &[&row])?;
            controls.push(control);
        }
        append_all(&root, &[&header, &grid])?;

        Ok(Self {
            controls,
            modulate_all,
            export,
        })
    }

    /// Repaint labels, slider positions and toggle states.
    pub fn sync(&self, settings: &Settings, flags: &ModulationFlags) {
        for c in &self.controls {
            let value = settings.get(c.param);
            let modulated = flags.is_set(c.param);
            c.label.set_text_content(Some(&format!(
                "{}: {}",
                c.param.label(),
                c.param.format_value(value)
            )));
            c.slider.set_value_as_number(value);
            c.slider.set_disabled(modulated);
            c.toggle
                .set_text_content(Some(if modulated { "Modulating" } else { "Modulate" }));
            _ = c.toggle.class_list().toggle_with_force("active", modulated);
        }
        let all = flags.all();
        self.modulate_all.set_text_content(Some(if all {
            "Stop All Modulation"
        } else {
            "Modulate All Settings"
        }));
        _ = self.modulate_all.class_list().toggle_with_force("active", all);
    }
}

fn build_control(document: &web::Document, param: Param) -> anyhow::Result<ParamControl> {
    let label = dom::create_with_class(document, "span", "control-label")?;
    let toggle = dom::create_with_class(document, "button", "modulate-toggle")?;
    _ = toggle.set_attribute("data-param", param.key());

    let slider = dom::create_with_class(document, "input", "control-slider")?
        .dyn_into::<web::HtmlInputElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let bounds = param.slider_bounds();
    slider.set_type("range");
    slider.set_min(&bounds.min.to_string());
    slider.set_max(&bounds.max.to_string());
    slider.set_step(&bounds.step.to_string());
    slider.set_id(&format!("slider-{}", param.key()));

    Ok(ParamControl {
        param,
        label,
        toggle,
        slider,
    })
}

fn append_all(parent: &web::Element, children: &[&web::Element]) -> anyhow::Result<()> {
    for child in children {
        parent
            .append_child(child)
            .map_err(|e| anyhow::anyhow!("append_child: {:?}", e))?;
    }
    Ok(())
}

/// Read a slider the way the control expects: whole numbers for counts and
/// distances, floats otherwise.
pub fn read_slider(param: Param, slider: &web::HtmlInputElement) -> Option<f64> {
    let v = slider.value_as_number();
    if !v.is_finite() {
        return None;
    }
    Some(if param.is_integral() { v.trunc() } else { v })
}
