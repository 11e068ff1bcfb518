pub mod add;
pub mod audit;
pub mod board;
pub mod dispatch;
pub mod history;
pub mod list;
pub mod navigate;
pub mod run;
pub mod schema;
pub mod sections;
pub mod shared;
pub mod transition;
