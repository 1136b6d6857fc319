use color_eyre::eyre::Error;

pub trait ResultExt<T>: Sized {
    fn ok_or_handle(self, handler: impl ErrorHandler) -> Option<T>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    Error: From<E>,
{
    fn ok_or_handle(self, handler: impl ErrorHandler) -> Option<T> {
        match self {
            Ok(value) => Some(value),
            Err(error) => {
                handler.handle_error(error.into());
                None
            }
        }
    }
}

pub trait ErrorHandler {
    fn handle_error(self, error: Error);
}

impl ErrorHandler for &mut MessageDialog {
    fn handle_error(self, error: Error) {
        self.display_error(error);
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::Display)]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug)]
struct Message {
    severity: Severity,
    error: Error,
}

/// Modal window showing a single warning or error until the user closes it.
#[derive(Debug, Default)]
pub struct MessageDialog {
    message: Option<Message>,
}

impl MessageDialog {
    pub fn display_error(&mut self, error: Error) {
        tracing::error!(?error);
        self.message = Some(Message {
            severity: Severity::Error,
            error,
        });
    }

    pub fn display_warning<E>(&mut self, warning: E)
    where
        Error: From<E>,
    {
        let error = Error::from(warning);
        tracing::warn!("{error}");
        self.message = Some(Message {
            severity: Severity::Warning,
            error,
        });
    }

    pub fn is_open(&self) -> bool {
        self.message.is_some()
    }

    pub fn severity(&self) -> Option<Severity> {
        self.message.as_ref().map(|message| message.severity)
    }

    pub fn clear(&mut self) {
        self.message = None;
    }

    pub fn show(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.message
        else {
            return;
        };

        let mut close = false;

        let response = egui::Modal::new(egui::Id::new("message_dialog")).show(ctx, |ui| {
            ui.set_max_width(400.0);
            ui.heading(message.severity.to_string());

            egui::ScrollArea::vertical()
                .id_salt("message_dialog")
                .show(ui, |ui| {
                    egui::Frame::new().inner_margin(5).show(ui, |ui| {
                        ui.label(format!("{:#}", message.error));
                    });
                });

            ui.separator();

            ui.with_layout(egui::Layout::right_to_left(Default::default()), |ui| {
                if ui.button("Close").clicked() {
                    close = true;
                }
            });
        });

        if close || response.should_close() {
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use color_eyre::eyre::eyre;

    use crate::{
        animation::AnimationError,
        error::{
            MessageDialog,
            ResultExt,
            Severity,
        },
    };

    #[test]
    fn warning_is_displayed_once() {
        let mut dialog = MessageDialog::default();
        assert!(!dialog.is_open());

        dialog.display_warning(AnimationError::EmptyRegistry);
        assert!(dialog.is_open());
        assert_eq!(dialog.severity(), Some(Severity::Warning));

        dialog.clear();
        assert!(!dialog.is_open());
    }

    #[test]
    fn failed_result_is_handled() {
        let mut dialog = MessageDialog::default();
        let result: Result<u32, _> = Err(eyre!("broken"));

        assert_eq!(result.ok_or_handle(&mut dialog), None);
        assert_eq!(dialog.severity(), Some(Severity::Error));

        let mut dialog = MessageDialog::default();
        assert_eq!(Ok::<_, std::io::Error>(3).ok_or_handle(&mut dialog), Some(3));
        assert!(!dialog.is_open());
    }
}
