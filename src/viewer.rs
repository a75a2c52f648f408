//! The comparison-grid window: one row per panel, showing the image next to
//! its blue, green and red channel histograms.

use eframe::egui;
use egui_plot::{Line, Plot, PlotPoints};
use image::RgbImage;

use crate::histogram::{histogram, Channel};

const ROW_SPACING: f32 = 8.0;
const MIN_ROW_HEIGHT: f32 = 160.0;

/// One fully prepared grid row.
pub struct PanelData {
    pub title: String,
    pub image: RgbImage,
    /// Histograms in [`Channel::ORDER`].
    pub histograms: [[u32; 256]; 3],
}

impl PanelData {
    pub fn new(title: String, image: RgbImage) -> Self {
        let histograms = Channel::ORDER.map(|channel| histogram(&image, channel));
        Self {
            title,
            image,
            histograms,
        }
    }
}

fn channel_color(channel: Channel) -> egui::Color32 {
    match channel {
        Channel::Blue => egui::Color32::from_rgb(60, 100, 230),
        Channel::Green => egui::Color32::from_rgb(40, 160, 70),
        Channel::Red => egui::Color32::from_rgb(210, 50, 50),
    }
}

pub struct ViewerApp {
    panels: Vec<PanelData>,
    // Uploaded lazily on the first frame, one texture per row.
    textures: Vec<Option<egui::TextureHandle>>,
}

impl ViewerApp {
    pub fn new(panels: Vec<PanelData>) -> Self {
        let textures = panels.iter().map(|_| None).collect();
        Self { panels, textures }
    }

    fn texture(&mut self, ctx: &egui::Context, row: usize) -> egui::TextureHandle {
        let Self { panels, textures } = self;
        textures[row]
            .get_or_insert_with(|| {
                let image = &panels[row].image;
                let size = [image.width() as usize, image.height() as usize];
                let pixels = egui::ColorImage::from_rgb(size, image.as_raw());
                ctx.load_texture(format!("panel-{row}"), pixels, egui::TextureOptions::LINEAR)
            })
            .clone()
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let rows = self.panels.len().max(1) as f32;
            let row_height =
                ((ui.available_height() - rows * ROW_SPACING) / rows).max(MIN_ROW_HEIGHT);

            egui::ScrollArea::both().show(ui, |ui| {
                for row in 0..self.panels.len() {
                    let texture = self.texture(ui.ctx(), row);
                    let panel = &self.panels[row];

                    ui.columns(4, |columns| {
                        show_image_cell(&mut columns[0], &panel.title, &texture, row_height);
                        for (slot, channel) in Channel::ORDER.into_iter().enumerate() {
                            show_histogram_cell(
                                &mut columns[slot + 1],
                                row,
                                channel,
                                &panel.histograms[slot],
                                row_height,
                            );
                        }
                    });
                    ui.add_space(ROW_SPACING);
                }
            });
        });
    }
}

// The image cell shows the row title above the picture, scaled to fit the
// cell while keeping its aspect ratio. No axes, matching the plots' framing.
fn show_image_cell(ui: &mut egui::Ui, title: &str, texture: &egui::TextureHandle, height: f32) {
    ui.vertical(|ui| {
        ui.strong(title);
        let size = texture.size_vec2();
        let available = ui.available_width();
        let scale = (available / size.x).min(height / size.y).min(1.0);
        ui.image((texture.id(), size * scale));
    });
}

fn show_histogram_cell(
    ui: &mut egui::Ui,
    row: usize,
    channel: Channel,
    counts: &[u32; 256],
    height: f32,
) {
    ui.vertical(|ui| {
        ui.strong(format!("{} Channel Histogram", channel.label()));

        let points: PlotPoints = counts
            .iter()
            .enumerate()
            .map(|(value, &count)| [value as f64, count as f64])
            .collect();

        Plot::new(("histogram", row, channel.label()))
            .height(height - ui.spacing().interact_size.y)
            .x_axis_label("Pixel Value")
            .y_axis_label("Frequency")
            .include_x(0.0)
            .include_x(255.0)
            .include_y(0.0)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .show(ui, |plot_ui| {
                plot_ui.line(Line::new(points).color(channel_color(channel)));
            });
    });
}

/// Opens the comparison window and blocks until the user closes it.
pub fn run(title: &str, panels: Vec<PanelData>) -> std::result::Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1500.0, 900.0])
            .with_min_inner_size([800.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(title, options, Box::new(|_cc| Ok(Box::new(ViewerApp::new(panels)))))
}
