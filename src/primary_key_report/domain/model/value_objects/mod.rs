pub mod primary_key_list;
