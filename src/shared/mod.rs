pub mod drive_url;
