use std::time::Instant;

use color_eyre::eyre::{
    Error,
    eyre,
};
use eframe::NativeOptions;
use egui::ViewportBuilder;
use egui_plot::{
    Corner,
    Legend,
    Line,
    Plot,
    PlotPoints,
};
use strum::IntoEnumIterator;

use crate::{
    args::Args,
    config::{
        AppConfig,
        PlotConfig,
    },
    controls::{
        ManualEntry,
        Parameter,
    },
    error::{
        MessageDialog,
        ResultExt,
    },
    files::AppFiles,
    state::AppState,
    wave::WaveKind,
};

pub fn run_app(args: Args) -> Result<(), Error> {
    let mut message_dialog = MessageDialog::default();

    // a broken config shouldn't keep the app from starting
    let mut config = if args.ignore_config {
        AppConfig::default()
    }
    else {
        AppFiles::open()
            .and_then(|app_files| app_files.read_config_or_create::<AppConfig>())
            .ok_or_handle(&mut message_dialog)
            .unwrap_or_default()
    };

    if let Some(interval_ms) = args.interval_ms {
        config.animation.interval_ms = interval_ms;
    }

    tracing::debug!(?config);

    let title = config.plot.title.clone();

    eframe::run_native(
        std::env!("CARGO_PKG_NAME"),
        NativeOptions {
            viewport: ViewportBuilder::default()
                .with_title(&title)
                .with_app_id(std::env!("CARGO_PKG_NAME"))
                .with_inner_size([config.window.width, config.window.height]),
            ..Default::default()
        },
        Box::new(move |_cc| Ok(Box::new(App::new(config, message_dialog)))),
    )
    .map_err(|e| eyre!("{e}"))?;

    Ok(())
}

#[derive(Debug)]
pub struct App {
    state: AppState,
    plot_config: PlotConfig,
    message_dialog: MessageDialog,
    manual_entry: Option<ManualEntry>,
}

impl App {
    pub fn new(config: AppConfig, message_dialog: MessageDialog) -> Self {
        Self {
            state: AppState::new(&config),
            plot_config: config.plot,
            message_dialog,
            manual_entry: None,
        }
    }

    fn sliders(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("parameter_sliders")
            .num_columns(3)
            .show(ui, |ui| {
                for parameter in Parameter::iter() {
                    let ticks = self.state.pending().scales().scale(parameter).ticks();
                    ui.label(parameter.to_string());

                    // only the readout changes here, packets are committed by "Add"
                    let pending = self.state.pending_mut();
                    ui.add(
                        egui::Slider::new(pending.tick_mut(parameter), 0..=ticks).show_value(false),
                    );
                    ui.monospace(pending.readout(parameter));
                    ui.end_row();
                }
            });

        let pending = self.state.pending_mut();
        egui::ComboBox::from_label("Wave kind")
            .selected_text(pending.kind.to_string())
            .show_ui(ui, |ui| {
                for kind in WaveKind::iter() {
                    ui.selectable_value(&mut pending.kind, kind, kind.to_string());
                }
            });
        ui.checkbox(&mut pending.invert, "Invert wave");
    }

    fn buttons(&mut self, ui: &mut egui::Ui) {
        ui.horizontal_wrapped(|ui| {
            if ui.button("Add").clicked() {
                self.state.add_pending_packet();
            }

            if ui
                .add_enabled(
                    self.state.registry().selected().is_some(),
                    egui::Button::new("Remove"),
                )
                .clicked()
            {
                self.state.remove_selected();
            }

            if ui.button("Manual entry").clicked() {
                self.manual_entry = Some(ManualEntry::from_pending(self.state.pending()));
            }

            if ui.button("Reset defaults").clicked() {
                self.state.reset_controls();
            }
        });

        ui.horizontal(|ui| {
            if ui.button("▶ Start").clicked() {
                if let Err(error) = self.state.start_animation(Instant::now()) {
                    self.message_dialog.display_warning(error);
                }
            }
            if ui.button("⏹ Stop").clicked() {
                self.state.stop_animation();
            }
        });
    }

    fn packet_list(&mut self, ui: &mut egui::Ui) {
        ui.label("Wave packets:");

        egui::ScrollArea::vertical()
            .id_salt("packet_list")
            .auto_shrink([false, true])
            .show(ui, |ui| {
                if self.state.registry().is_empty() {
                    ui.weak("No wave packets added");
                }

                let mut selected = self.state.registry().selected();
                for (index, label) in self.state.registry().labels().into_iter().enumerate() {
                    ui.selectable_value(&mut selected, Some(index), label);
                }
                self.state.select(selected);
            });
    }

    fn status(&self, ui: &mut egui::Ui) {
        let signal = self.state.signal();
        ui.horizontal(|ui| {
            ui.label(if self.state.animator().is_running() {
                "Running"
            }
            else {
                "Stopped"
            });
            ui.separator();
            ui.label(format!("Frame: {}/{}", signal.frame, self.state.grid().len()));
            ui.separator();
            ui.label(format!("Time: {:.2}", signal.time));
        });
    }

    fn plot(&self, ui: &mut egui::Ui) {
        let signal = self.state.signal();
        let grid = self.state.grid();

        ui.vertical_centered(|ui| {
            ui.heading(self.plot_config.title.as_str());
        });

        Plot::new("wave_packet_plot")
            .legend(Legend::default().position(Corner::RightTop))
            .x_axis_label(self.plot_config.x_label.as_str())
            .y_axis_label(self.plot_config.y_label.as_str())
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds_x(grid.start()..=grid.end());
                if let Some([y_min, y_max]) = self.plot_config.y_bounds {
                    plot_ui.set_plot_bounds_y(y_min..=y_max);
                }

                for (index, points) in signal.component_points().enumerate() {
                    plot_ui.line(Line::new(
                        format!("Packet {}", index + 1),
                        PlotPoints::from(points),
                    ));
                }

                plot_ui.line(Line::new(
                    self.plot_config.sum_label.as_str(),
                    PlotPoints::from(signal.sum_points()),
                ));
            });
    }

    fn manual_entry_window(&mut self, ctx: &egui::Context) {
        let Some(entry) = &mut self.manual_entry
        else {
            return;
        };

        let mut open = true;
        let mut add = false;

        egui::Window::new("Manual entry")
            .movable(true)
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("manual_entry_fields")
                    .num_columns(2)
                    .show(ui, |ui| {
                        for parameter in Parameter::iter() {
                            ui.label(parameter.to_string());
                            ui.text_edit_singleline(entry.field_mut(parameter));
                            ui.end_row();
                        }
                    });

                ui.separator();

                ui.with_layout(egui::Layout::right_to_left(Default::default()), |ui| {
                    if ui.button("Add").clicked() {
                        add = true;
                    }
                });
            });

        if add {
            // malformed input is dropped without a message
            if self.state.add_manual_packet(entry).is_some() {
                open = false;
            }
        }

        if !open {
            self.manual_entry = None;
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.state.poll_animation(now);
        if let Some(delay) = self.state.animator().time_until_next_tick(now) {
            ctx.request_repaint_after(delay);
        }

        egui::SidePanel::left("controls")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                self.sliders(ui);
                ui.separator();
                self.buttons(ui);
                ui.separator();

                let mut show_components = self.state.show_components();
                if ui
                    .checkbox(&mut show_components, "Show individual packets")
                    .changed()
                {
                    self.state.set_show_components(show_components);
                }
                ui.separator();

                self.packet_list(ui);
            });

        egui::TopBottomPanel::bottom("status").show(ctx, |ui| {
            self.status(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.plot(ui);
        });

        self.manual_entry_window(ctx);
        self.message_dialog.show(ctx);
    }
}
