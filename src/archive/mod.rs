pub mod tweet_archiver;

pub use tweet_archiver::{ParentLink, TweetArchiver, IN_REPLY_TO};
