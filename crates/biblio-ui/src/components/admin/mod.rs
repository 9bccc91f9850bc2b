//! Administration screens; every route here sits behind the admin guard.

mod books;
mod records;
mod users;

pub(crate) use books::AdminBooksPage;
pub(crate) use records::AdminBorrowRecordsPage;
pub(crate) use users::AdminUsersPage;
