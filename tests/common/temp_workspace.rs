use std::path::PathBuf;

use ledger_lore::repo::Repository;
use tempfile::TempDir;

/// Represents a test fixture: a set of files to lay out on disk.
#[derive(Debug)]
pub struct Fixture {
    /// files in fixture
    pub files: Vec<(PathBuf, String)>,
}

/// Parses a fixture string into relative paths and contents.
///
/// Each file starts with a `//- path/to/file` line; everything up to the
/// next marker is its content.
pub fn parse_fixture(input: &str) -> Fixture {
    let mut files = Vec::new();
    let mut current_path: Option<PathBuf> = None;
    let mut current_content = String::new();

    for line in input.lines() {
        if let Some(path) = line.strip_prefix("//- ") {
            match current_path.take() {
                Some(p) => files.push((p, std::mem::take(&mut current_content))),
                None => current_content.clear(),
            }
            // Store relative path (trim leading slash)
            current_path = Some(PathBuf::from(path.trim().trim_start_matches('/')));
        } else {
            current_content.push_str(line);
            current_content.push('\n');
        }
    }

    if let Some(p) = current_path {
        files.push((p, current_content));
    }

    Fixture { files }
}

/// Temporary repository checkout built from a fixture.
pub struct TestWorkspace {
    /// Temporary folder for the workspace
    pub root: TempDir,
    /// fixture for the workspace
    pub fixture: Fixture,
    /// Canonicalized root path (resolves symlinks like /var -> /private/var on macOS)
    canonical_root: PathBuf,
}

impl TestWorkspace {
    /// Creates a workspace and writes every fixture file.
    /// ## Panics
    /// if a file cannot be written
    pub fn new(root: TempDir, fixture: &str) -> Self {
        let fixture = parse_fixture(fixture);

        for (path, content) in &fixture.files {
            let abs = root.path().join(path);
            std::fs::create_dir_all(abs.parent().unwrap()).unwrap();
            std::fs::write(&abs, content).unwrap();
        }

        let canonical_root = root
            .path()
            .canonicalize()
            .expect("Failed to canonicalize root");

        Self {
            root,
            fixture,
            canonical_root,
        }
    }

    /// Creates a new builder for constructing a test workspace
    pub fn builder() -> TestWorkspaceBuilder {
        TestWorkspaceBuilder::new()
    }

    /// Returns the canonicalized root path
    pub fn canonical_root(&self) -> &PathBuf {
        &self.canonical_root
    }

    /// Converts a relative path to an absolute path
    pub fn apath(&self, path: &str) -> PathBuf {
        self.canonical_root.join(path)
    }

    /// Opens a repository handle on the workspace.
    /// ## Panics
    /// if the root cannot be opened
    pub fn repo(&self) -> Repository {
        Repository::builder()
            .root(&self.canonical_root)
            .build()
            .expect("Failed to open repository")
    }
}

/// Builder for creating test workspaces
pub struct TestWorkspaceBuilder {
    fixture: Option<String>,
    extra: Vec<(PathBuf, Vec<u8>)>,
}

impl TestWorkspaceBuilder {
    /// Creates a new builder
    pub fn new() -> Self {
        Self {
            fixture: None,
            extra: Vec::new(),
        }
    }

    /// Sets the fixture content
    #[must_use]
    pub fn fixture(mut self, fixture: &str) -> Self {
        self.fixture = Some(fixture.to_string());
        self
    }

    /// Adds a raw file, e.g. one that is not valid UTF-8.
    #[must_use]
    pub fn raw_file(mut self, path: &str, bytes: &[u8]) -> Self {
        self.extra.push((PathBuf::from(path), bytes.to_vec()));
        self
    }

    /// Builds the test workspace
    /// ## Panics
    /// Panics if fixture is not set
    pub fn build(self) -> TestWorkspace {
        let fixture_str = self.fixture.expect("Fixture must be set using .fixture()");
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let workspace = TestWorkspace::new(temp_dir, &fixture_str);

        for (path, bytes) in self.extra {
            let abs = workspace.apath(&path.to_string_lossy());
            std::fs::create_dir_all(abs.parent().unwrap()).unwrap();
            std::fs::write(abs, bytes).unwrap();
        }

        workspace
    }
}

impl Default for TestWorkspaceBuilder {
    fn default() -> Self {
        Self::new()
    }
}
