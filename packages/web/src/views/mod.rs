mod users;
pub use users::Users;

mod user_detail;
pub use user_detail::UserDetail;

mod new_user;
pub use new_user::NewUser;

mod not_found;
pub use not_found::PageNotFound;
