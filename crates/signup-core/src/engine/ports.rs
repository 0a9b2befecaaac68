//! Puertos del engine hacia la capa de presentación.

use crate::signal::Signal;

/// Entradas: cada llamada es fire-and-forget.
pub trait FormInputs {
    fn on_name_changed(&mut self, name: Option<&str>);
    fn on_email_changed(&mut self, email: Option<&str>);
    fn on_password_changed(&mut self, password: Option<&str>);
    fn on_submit_pressed(&mut self);
    fn on_view_loaded(&mut self);
}

/// Salidas: señales a las que se suscribe la capa de presentación.
pub trait FormOutputs {
    /// Texto de alerta tras cada submit.
    fn alert_message(&self) -> &Signal<String>;
    /// Habilitación del botón de submit. Completa al bloquearse el formulario.
    fn submit_button_enabled(&self) -> &Signal<bool>;
}
