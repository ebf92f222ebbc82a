pub mod a001_user_record;
pub mod a002_list_item;
