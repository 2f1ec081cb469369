pub mod footer {
    mod view;
    pub use view::Footer;
}

pub mod nav {
    mod model;
    mod view;
    pub use model::NavAction;
    pub use view::NavBar;
}

pub mod home {
    mod model;
    mod view;
    pub use model::HomeAction;
    pub use view::Home;
}

pub mod input {
    mod model;
    mod view;
    pub use model::{InputAction, InputResult, InputState};
    pub use view::Input;
}

pub mod result {
    mod model;
    mod view;
    pub use model::{ResultAction, ResultState, ResultText};
    pub use view::ResultView;
}
