pub mod menu;
pub mod progress;
pub mod prompts;
pub mod renderer;
