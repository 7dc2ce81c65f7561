pub mod login_form;
pub mod navigation_bar;
pub mod protected_route;
