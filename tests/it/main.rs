mod behavior_macro;
mod errors;
