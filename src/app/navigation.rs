use crate::routes::Route;
use crate::views::cards::Navigator;

/// Single-slot router: the host shows whatever route was navigated to last.
#[derive(Debug, Default)]
pub struct Router {
    current: Route,
}

impl Router {
    pub fn current(&self) -> Route {
        self.current
    }

    pub fn back(&mut self) {
        self.navigate(Route::Home);
    }
}

impl Navigator for Router {
    fn navigate(&mut self, route: Route) {
        if route != self.current {
            log::info!("navigate: {} -> {}", self.current, route);
            self.current = route;
        }
    }
}
