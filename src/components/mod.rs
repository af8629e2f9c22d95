pub mod app;
pub mod campaign_form;
pub mod dashboard;
pub mod instructions;
pub mod login_screen;
pub mod markdown_view;
pub mod nav_bar;

pub use app::App;
pub use campaign_form::CampaignForm;
pub use dashboard::Dashboard;
pub use instructions::Instructions;
pub use login_screen::LoginScreen;
pub use markdown_view::MarkdownView;
pub use nav_bar::NavBar;
