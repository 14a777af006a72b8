mod cid;
mod download;
mod upload;

pub use self::cid::CidCommand;
pub use self::download::DownloadCommand;
pub use self::upload::UploadCommand;
