pub mod alert;
pub mod conditional_forwarding;
pub mod dns_form;
pub mod dns_options;
pub mod editor;
pub mod translator;
pub mod upstream_list;
