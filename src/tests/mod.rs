mod unit_config;
mod unit_row_encoding;
