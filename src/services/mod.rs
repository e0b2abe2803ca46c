// FoxBr services
// Services provide supporting functionality around the managers: settings persistence.

pub mod settings_engine;
