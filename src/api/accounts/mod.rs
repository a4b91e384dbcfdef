pub mod functions;
pub mod handlers;
pub mod structures;

pub use handlers::{
    __path_create_account, __path_delete_account, __path_get_account, __path_list_accounts,
    __path_update_account, create_account, delete_account, get_account, init_routes,
    list_accounts, update_account,
};

pub use structures::{CreateAccountDto, UpdateAccountDto};
