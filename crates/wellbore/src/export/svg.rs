//! SVG export backend.
//!
//! [`Svg`] paints a [`Scene`] into an SVG document and writes it to any
//! [`Write`](std::io::Write) sink, so the same exporter serves files and in-memory
//! buffers. Construct it with [`SvgBuilder`].
//!
//! # Document structure
//!
//! ```text
//! <svg width=W*zoom height=H*zoom viewBox="0 0 W*zoom H*zoom">
//!   <defs/>                      gradients and patterns
//!   <rect/>                      optional background
//!   <g transform="scale(zoom)">  everything else, in scene coordinates
//!     sky, ground, segments, labels, readouts
//!   </g>
//! </svg>
//! ```

mod labels;
mod string;
mod well;

use std::io::Write;

use log::{debug, error, info};
use svg::{Document, node::element as svg_element};

use wellbore_core::{
    color::Color,
    completion::ZOOM_RANGE,
    geometry::Size,
    scene::{Scene, Segment, SegmentKind},
};

use crate::{
    config::StyleConfig,
    export::{self, Exporter},
};

/// Colors used to paint a schematic.
#[derive(Debug, Clone)]
struct Palette {
    background: Option<Color>,
    accent: Color,
    sky: Color,
    ground: Color,
    ground_line: Color,
    ink: Color,
    muted: Color,
    steel: Color,
    steel_dark: Color,
    metal: Color,
    cement: Color,
    fluid: Color,
    rat_hole: Color,
    cable: Color,
    valve: Color,
    valve_edge: Color,
    sensor: Color,
    sensor_edge: Color,
    intake: Color,
    panel: Color,
    label_fill: Color,
    label_edge: Color,
}

impl Palette {
    fn from_style(style: &StyleConfig) -> Result<Self, export::Error> {
        let background = style.background_color().map_err(export::Error::Render)?;
        let accent = match style.accent_color().map_err(export::Error::Render)? {
            Some(color) => color,
            None => palette_color("#3498db")?,
        };

        Ok(Self {
            background,
            accent,
            sky: palette_color("#d6eaf8")?,
            ground: palette_color("#f4f6f7")?,
            ground_line: palette_color("#7f8c8d")?,
            ink: palette_color("#2c3e50")?,
            muted: palette_color("#7f8c8d")?,
            steel: palette_color("#546e7a")?,
            steel_dark: palette_color("#37474f")?,
            metal: palette_color("#b0b7bd")?,
            cement: palette_color("#bdc3c7")?,
            fluid: palette_color("#3498db")?,
            rat_hole: palette_color("#5d4037")?,
            cable: palette_color("#c0392b")?,
            valve: palette_color("#e74c3c")?,
            valve_edge: palette_color("#c0392b")?,
            sensor: palette_color("#d35400")?,
            sensor_edge: palette_color("#a04000")?,
            intake: palette_color("#b0bec5")?,
            panel: palette_color("#f5f5f5")?,
            label_fill: palette_color("white")?.with_alpha(0.9),
            label_edge: palette_color("#bdc3c7")?,
        })
    }
}

fn palette_color(value: &str) -> Result<Color, export::Error> {
    Color::new(value).map_err(export::Error::Render)
}

/// Builder for [`Svg`] exporters.
///
/// # Examples
///
/// ```
/// use wellbore::{config::StyleConfig, export::{Exporter, svg::SvgBuilder}, layout::layout};
/// use wellbore_core::completion::CompletionConfig;
///
/// let scene = layout(&CompletionConfig::default());
/// let mut exporter = SvgBuilder::new(Vec::new())
///     .with_style(&StyleConfig::default())
///     .with_zoom(1.2)
///     .build()
///     .unwrap();
/// exporter.export_scene(&scene).unwrap();
///
/// let svg = String::from_utf8(exporter.into_inner()).unwrap();
/// assert!(svg.contains("scale(1.2)"));
/// ```
pub struct SvgBuilder<W> {
    writer: W,
    style: StyleConfig,
    zoom: f32,
}

impl<W: Write> SvgBuilder<W> {
    /// Creates a builder that writes documents to `writer`.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            style: StyleConfig::default(),
            zoom: 1.0,
        }
    }

    /// Sets the style overrides.
    pub fn with_style(mut self, style: &StyleConfig) -> Self {
        self.style = style.clone();
        self
    }

    /// Sets the display zoom. Values outside the zoom domain are clamped.
    pub fn with_zoom(mut self, zoom: f32) -> Self {
        self.zoom = zoom;
        self
    }

    /// Builds the exporter.
    ///
    /// # Errors
    ///
    /// Returns [`export::Error::Render`] if a configured color is invalid.
    pub fn build(self) -> Result<Svg<W>, export::Error> {
        let palette = Palette::from_style(&self.style)?;
        let zoom = if self.zoom.is_nan() {
            *ZOOM_RANGE.start()
        } else {
            self.zoom.clamp(*ZOOM_RANGE.start(), *ZOOM_RANGE.end())
        };

        Ok(Svg {
            writer: self.writer,
            palette,
            zoom,
        })
    }
}

/// SVG exporter for schematic scenes.
pub struct Svg<W> {
    writer: W,
    palette: Palette,
    zoom: f32,
}

impl<W: Write> Svg<W> {
    /// Consumes the exporter and returns its writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    /// Renders the scene into a complete SVG document.
    pub fn render_document(&self, scene: &Scene) -> Document {
        let svg_size = scene.size().scale(self.zoom);
        debug!(
            width = svg_size.width(),
            height = svg_size.height(),
            zoom = self.zoom;
            "SVG dimensions"
        );

        let doc = Document::new()
            .set(
                "viewBox",
                format!("0 0 {} {}", svg_size.width(), svg_size.height()),
            )
            .set("width", svg_size.width())
            .set("height", svg_size.height())
            .add(self.definitions());

        let doc = self.add_background(doc, svg_size);

        let main_group = svg_element::Group::new()
            .set("transform", format!("scale({})", self.zoom))
            .add(self.render_backdrop(scene));

        let main_group = scene
            .visible_segments()
            .fold(main_group, |group, segment| {
                group.add(self.render_segment(scene, segment))
            });

        let main_group = scene
            .labels()
            .iter()
            .fold(main_group, |group, label| group.add(self.render_label(label)))
            .add(self.render_readouts(scene));

        doc.add(main_group)
    }

    /// Adds a full-size background rectangle when a background color is configured.
    fn add_background(&self, doc: Document, size: Size) -> Document {
        match self.palette.background {
            Some(color) => doc.add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", size.width())
                    .set("height", size.height())
                    .set("fill", &color),
            ),
            None => doc,
        }
    }

    /// Gradient and pattern definitions referenced by segment painters.
    fn definitions(&self) -> svg_element::Definitions {
        let metal = svg_element::LinearGradient::new()
            .set("id", "grad-metal")
            .set("x1", "0%")
            .set("x2", "100%")
            .add(gradient_stop("0%", &self.palette.steel_dark))
            .add(gradient_stop("50%", &self.palette.metal))
            .add(gradient_stop("100%", &self.palette.steel_dark));

        let fluid = svg_element::LinearGradient::new()
            .set("id", "grad-fluid")
            .set("x1", "0%")
            .set("y1", "0%")
            .set("x2", "0%")
            .set("y2", "100%")
            .add(gradient_stop("0%", &self.palette.fluid.with_alpha(0.2)))
            .add(gradient_stop("100%", &self.palette.fluid.with_alpha(0.5)));

        let cement = svg_element::Pattern::new()
            .set("id", "pat-cement")
            .set("width", 5)
            .set("height", 5)
            .set("patternUnits", "userSpaceOnUse")
            .add(
                wellbore_core::apply_fill!(
                    svg_element::Rectangle::new()
                        .set("width", 5)
                        .set("height", 5),
                    self.palette.cement.with_alpha(0.3)
                ),
            )
            .add(
                svg_element::Circle::new()
                    .set("cx", 2)
                    .set("cy", 2)
                    .set("r", 0.5)
                    .set("fill", &self.palette.muted),
            );

        svg_element::Definitions::new()
            .add(metal)
            .add(fluid)
            .add(cement)
    }

    /// Sky band and ground fill behind the well.
    fn render_backdrop(&self, scene: &Scene) -> svg_element::Group {
        let ground_y = scene.ground_y();
        let width = scene.total_width();

        svg_element::Group::new()
            .add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", 0)
                    .set("width", width)
                    .set("height", ground_y)
                    .set("fill", &self.palette.sky),
            )
            .add(
                svg_element::Rectangle::new()
                    .set("x", 0)
                    .set("y", ground_y)
                    .set("width", width)
                    .set("height", scene.total_height() - ground_y)
                    .set("fill", &self.palette.ground),
            )
            .add(
                svg_element::Line::new()
                    .set("x1", 0)
                    .set("y1", ground_y)
                    .set("x2", width)
                    .set("y2", ground_y)
                    .set("stroke", &self.palette.ground_line)
                    .set("stroke-width", 4),
            )
    }

    /// Dispatches a segment to the painter for its kind.
    fn render_segment(&self, scene: &Scene, segment: &Segment) -> Box<dyn svg::Node> {
        match segment.kind() {
            SegmentKind::Cement => self.render_cement(segment),
            SegmentKind::Casing => self.render_casing(segment),
            SegmentKind::FluidColumn => self.render_fluid_column(segment, scene),
            SegmentKind::PerforationBand => self.render_perforations(segment, scene),
            SegmentKind::SurfaceEquipment => self.render_surface_equipment(segment),
            SegmentKind::Vsd => self.render_vsd(segment, scene),
            SegmentKind::Tubing => self.render_tubing(segment),
            SegmentKind::Cable => self.render_cable(segment),
            SegmentKind::CableGuard => self.render_cable_guard(segment),
            SegmentKind::Packer => self.render_packer(segment),
            SegmentKind::YTool => self.render_y_tool(segment),
            SegmentKind::Pump => self.render_pump(segment, scene),
            SegmentKind::Intake => self.render_intake(segment),
            SegmentKind::Seal => self.render_seal(segment),
            SegmentKind::Motor => self.render_motor(segment, scene),
            SegmentKind::Sensor => self.render_sensor(segment),
        }
    }

    /// Writes an SVG document to the underlying writer.
    pub fn write_document(&mut self, doc: &Document) -> Result<(), export::Error> {
        if let Err(err) = write!(self.writer, "{doc}") {
            error!(err:err; "Failed to write SVG content");
            return Err(export::Error::Io(err));
        }
        if let Err(err) = self.writer.flush() {
            error!(err:err; "Failed to flush SVG content");
            return Err(export::Error::Io(err));
        }
        Ok(())
    }
}

impl<W: Write> Exporter for Svg<W> {
    fn export_scene(&mut self, scene: &Scene) -> Result<(), export::Error> {
        let doc = self.render_document(scene);
        debug!("SVG document rendered");

        self.write_document(&doc)?;
        info!(
            segments_count = scene.segments().len(),
            labels_count = scene.labels().len();
            "SVG document written"
        );
        Ok(())
    }
}

fn gradient_stop(offset: &str, color: &Color) -> svg_element::Stop {
    svg_element::Stop::new()
        .set("offset", offset)
        .set("stop-color", color.with_alpha(1.0).to_string())
        .set("stop-opacity", color.alpha())
}

/// Axis-aligned rectangle covering a segment.
fn segment_rect(segment: &Segment) -> svg_element::Rectangle {
    svg_element::Rectangle::new()
        .set("x", segment.left_x())
        .set("y", segment.top_y())
        .set("width", segment.width())
        .set("height", segment.height())
}
