#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Screen {
    Closet,
    Filters,
    Settings,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Closet => "My Closet",
            Screen::Filters => "Filter & Sort",
            Screen::Settings => "Settings",
        }
    }
}

/// Screen stack rooted at the closet view. The root is never popped.
pub struct NavigationStack {
    stack: Vec<Screen>,
}

impl NavigationStack {
    pub fn new() -> Self {
        Self {
            stack: vec![Screen::Closet],
        }
    }

    pub fn push(&mut self, screen: Screen) {
        if self.current() == screen {
            return;
        }
        tracing::debug!("Navigating to {}", screen.title());
        self.stack.push(screen);
    }

    pub fn pop(&mut self) -> Option<Screen> {
        if self.stack.len() <= 1 {
            return None;
        }
        let popped = self.stack.pop();
        tracing::debug!("Back to {}", self.current().title());
        popped
    }

    pub fn current(&self) -> Screen {
        self.stack.last().copied().unwrap_or(Screen::Closet)
    }
}

impl Default for NavigationStack {
    fn default() -> Self {
        Self::new()
    }
}
