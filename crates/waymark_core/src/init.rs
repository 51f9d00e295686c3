use crate::prelude::*;
use cap_std::ambient_authority;
use std::path::PathBuf;

pub const WAYMARK_DATA_DIR_ENV: &str = "WAYMARK_DATA_DIR";

/// Waymark data directory.
/// We will read a path from env `WAYMARK_DATA_DIR` or create a folder at data_local_dir/waymark, where data_local_dir is platform specific.
/// Inside this directory, we store the configuration file and logs.
pub fn get_waymark_dir() -> Result<(PathBuf, Dir)> {
    let authority = ambient_authority();
    let data_dir_path = match std::env::var(WAYMARK_DATA_DIR_ENV) {
        Ok(env_dir) => PathBuf::from(env_dir),
        Err(_) => match directories_next::ProjectDirs::from("com.waymark", "", "waymark") {
            Some(pd) => pd.data_local_dir().to_path_buf(),
            None => {
                return Err(miette::miette!(
                    "getting project dirs failed for some reason"
                ))
            }
        },
    };
    if data_dir_path.to_str().is_none() {
        return Err(miette::miette!(
            "waymark data dir is not utf-8: {data_dir_path:?}"
        ));
    }
    if let Err(e) = cap_std::fs::Dir::create_ambient_dir_all(&data_dir_path, authority) {
        return Err(miette::miette!(
            "failed to create waymark directory at {data_dir_path:?} due to error: {e}"
        ));
    }
    let dir = match cap_std::fs::Dir::open_ambient_dir(&data_dir_path, authority) {
        Ok(dir) => Dir::from_cap_std(dir),
        Err(e) => {
            return Err(miette::miette!(
                "failed to open waymark data dir at {data_dir_path:?} due to {e}"
            ))
        }
    };

    Ok((data_dir_path, dir))
}

#[cfg(test)]
mod test {
    use super::*;
    use similar_asserts::assert_eq;

    /// all env var cases live in one test, so that parallel tests never see each other's `WAYMARK_DATA_DIR`
    #[test]
    fn data_dir_comes_from_env() {
        let tmp = tempfile::tempdir().expect("failed to create temp dir");
        let expected = tmp.path().join("nested").join("waymark");
        std::env::set_var(WAYMARK_DATA_DIR_ENV, &expected);

        let (path, dir) = get_waymark_dir().expect("failed to get data dir");
        assert_eq!(path, expected);
        assert!(path.is_dir());
        dir.write("marker.txt", "abc123")
            .expect("failed to write into data dir");
        assert!(expected.join("marker.txt").is_file());

        // an existing dir is opened as is
        let (path, dir) = get_waymark_dir().expect("failed to reopen data dir");
        assert_eq!(path, expected);
        assert_eq!(
            dir.read_to_string("marker.txt")
                .expect("failed to read from data dir"),
            "abc123"
        );

        std::env::remove_var(WAYMARK_DATA_DIR_ENV);
    }
}
