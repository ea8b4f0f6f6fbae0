use starrank::cache::StarCache;
use tempfile::TempDir;

pub struct TestContext {
    pub cache: StarCache,
    _dir: TempDir,
}

impl TestContext {
    pub async fn new() -> anyhow::Result<Self> {
        let dir = tempfile::tempdir()?;
        let cache = StarCache::open(dir.path().join("star_cache.db")).await?;

        Ok(TestContext { cache, _dir: dir })
    }
}
