//! Loading indicator

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoaderSize {
    Small,
    Medium,
    #[default]
    Large,
    ExtraLarge,
}

pub fn render_loader(size: LoaderSize, text: Option<&str>) -> String {
    let spinner = match size {
        LoaderSize::Small => "·",
        LoaderSize::Medium => "··",
        LoaderSize::Large => "···",
        LoaderSize::ExtraLarge => "····",
    };
    format!("{} {}", spinner, text.unwrap_or("Loading..."))
}
