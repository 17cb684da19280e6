use crate::icon::IconRegistry;
use crate::provider::CalmProvider;
use crate::theme::Theme;

type LaunchHook = Box<dyn FnOnce(&mut gpui::App, &CalmProvider) + 'static>;

/// Wraps [`gpui::Application`] so the theme provider is installed before any window opens.
pub struct CalmApplication {
    application: gpui::Application,
    provider: CalmProvider,
    launch_hooks: Vec<LaunchHook>,
}

impl Default for CalmApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl CalmApplication {
    pub fn new() -> Self {
        Self::from_application(gpui::Application::new())
    }

    pub fn headless() -> Self {
        Self::from_application(gpui::Application::headless())
    }

    pub fn from_application(application: gpui::Application) -> Self {
        Self {
            application,
            provider: CalmProvider::new(),
            launch_hooks: Vec::new(),
        }
    }

    pub fn with_provider(mut self, provider: CalmProvider) -> Self {
        self.provider = provider;
        self
    }

    pub fn set_theme(mut self, configure: impl FnOnce(Theme) -> Theme) -> Self {
        self.provider = self.provider.set_theme(configure);
        self
    }

    pub fn before_launch(
        mut self,
        hook: impl FnOnce(&mut gpui::App, &CalmProvider) + 'static,
    ) -> Self {
        self.launch_hooks.push(Box::new(hook));
        self
    }

    pub fn run<F>(self, on_finish_launching: F)
    where
        F: 'static + FnOnce(&mut gpui::App),
    {
        let provider = self.provider;
        let launch_hooks = self.launch_hooks;
        self.application.run(move |cx| {
            provider.clone().init(cx);
            let icons = IconRegistry::shared();
            tracing::debug!(icons = icons.count(), "select icons ready");

            for hook in launch_hooks {
                hook(cx, &provider);
            }

            on_finish_launching(cx);
        });
    }
}
