//! Command handlers for the demo binary

mod bar;
mod spin;

pub use bar::run_bar_command;
pub use spin::run_spin_command;

/// Callback printing `message` on its own line, if one was given
fn done_callback(message: Option<&str>) -> Option<impl FnMut() + Send + 'static> {
    message.map(|message| {
        let message = message.to_string();
        move || println!("{}", message)
    })
}
