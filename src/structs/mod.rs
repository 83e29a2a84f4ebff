pub mod feed_params;
pub mod login_form;
pub mod post_form;
pub mod subscribe_form;
