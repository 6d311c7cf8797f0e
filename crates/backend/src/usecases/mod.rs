pub mod u501_convert_quote;
pub mod u502_shopping_list;
