pub mod u001_file_upload;
