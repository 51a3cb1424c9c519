use eframe::egui::{ColorImage, Context, TextureHandle, TextureOptions};

/// One GPU texture re-uploaded only when its source revision changes.
pub struct TextureCache {
    name: &'static str,
    options: TextureOptions,
    revision: Option<u64>,
    handle: Option<TextureHandle>,
}

impl TextureCache {
    pub fn new(name: &'static str, options: TextureOptions) -> Self {
        Self {
            name,
            options,
            revision: None,
            handle: None,
        }
    }

    /// Return the texture for `revision`, building it with `make` if stale.
    pub fn get(
        &mut self,
        ctx: &Context,
        revision: u64,
        make: impl FnOnce() -> ColorImage,
    ) -> TextureHandle {
        let handle = match self.handle.take() {
            Some(mut handle) => {
                if self.revision != Some(revision) {
                    handle.set(make(), self.options);
                }
                handle
            }
            None => ctx.load_texture(self.name, make(), self.options),
        };
        self.revision = Some(revision);
        self.handle = Some(handle.clone());
        handle
    }
}
