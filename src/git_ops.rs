use anyhow::{Context, Result, anyhow};
use git2::{Repository, Signature, Time};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

/// Optional git version control for the tasks file
///
/// When the tasks file lives inside a git work tree, every save can be
/// recorded as a commit. Outside a repository every operation is a no-op.
pub struct GitOps {
    repo: Option<Mutex<Repository>>,
}

impl GitOps {
    /// Detect the repository enclosing `file_path`
    ///
    /// The file itself does not need to exist yet.
    pub fn new(file_path: &Path) -> Self {
        let repo = Self::find_repository(&Self::search_dir(file_path)).map(Mutex::new);
        Self { repo }
    }

    /// A `GitOps` that never touches git
    pub fn disabled() -> Self {
        Self { repo: None }
    }

    /// Check if the file is under git version control
    pub fn is_git_managed(&self) -> bool {
        self.repo.is_some()
    }

    fn search_dir(file_path: &Path) -> PathBuf {
        if file_path.is_dir() {
            return file_path.to_path_buf();
        }
        match file_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        }
    }

    fn find_repository(dir: &Path) -> Option<Repository> {
        Repository::discover(dir).ok()
    }

    fn lock(&self) -> Result<Option<MutexGuard<'_, Repository>>> {
        match &self.repo {
            Some(r) => r
                .lock()
                .map(Some)
                .map_err(|_| anyhow!("git repository lock poisoned")),
            None => Ok(None),
        }
    }

    /// Fast-forward the current branch from `origin`
    pub fn pull(&self) -> Result<()> {
        let Some(repo) = self.lock()? else {
            return Ok(());
        };

        let branch_name = Self::current_branch(&repo)?;
        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;
        remote
            .fetch(&[&branch_name], None, None)
            .context("Failed to fetch from origin")?;

        let fetch_head = repo.find_reference("FETCH_HEAD")?;
        let fetch_commit = repo.reference_to_annotated_commit(&fetch_head)?;
        let (analysis, _) = repo.merge_analysis(&[&fetch_commit])?;

        if analysis.is_up_to_date() {
            return Ok(());
        }
        if analysis.is_fast_forward() {
            let refname = format!("refs/heads/{}", branch_name);
            let mut reference = repo.find_reference(&refname)?;
            reference.set_target(fetch_commit.id(), "Fast-forward")?;
            repo.set_head(&refname)?;
            repo.checkout_head(Some(git2::build::CheckoutBuilder::default().force()))?;
            return Ok(());
        }
        Err(anyhow!(
            "Remote has diverged from the local tasks file; resolve the merge manually"
        ))
    }

    /// Commit the current content of `file_path`
    pub fn commit(&self, file_path: &Path, message: &str) -> Result<()> {
        let Some(repo) = self.lock()? else {
            return Ok(());
        };

        let workdir = repo
            .workdir()
            .context("Repository has no working directory")?
            .canonicalize()
            .context("Failed to resolve repository directory")?;
        let file_path = file_path
            .canonicalize()
            .with_context(|| format!("Failed to resolve {}", file_path.display()))?;
        let relative_path = file_path
            .strip_prefix(&workdir)
            .context("Tasks file is not inside the repository")?;

        let mut index = repo.index()?;
        index.add_path(relative_path)?;
        index.write()?;
        let tree_id = index.write_tree()?;
        let tree = repo.find_tree(tree_id)?;

        // Unborn HEAD means this is the first commit
        let parent_commit = match repo.head() {
            Ok(head) => {
                let oid = head.target().context("HEAD has no target")?;
                Some(repo.find_commit(oid)?)
            }
            Err(_) => None,
        };
        let parents: Vec<_> = parent_commit.iter().collect();
        let signature = Self::signature(&repo)?;

        repo.commit(
            Some("HEAD"),
            &signature,
            &signature,
            message,
            &tree,
            &parents,
        )?;
        Ok(())
    }

    /// Push the current branch to `origin`
    pub fn push(&self) -> Result<()> {
        let Some(repo) = self.lock()? else {
            return Ok(());
        };

        let branch_name = Self::current_branch(&repo)?;
        let mut remote = repo
            .find_remote("origin")
            .context("Failed to find remote 'origin'")?;
        let refspec = format!("refs/heads/{}", branch_name);
        remote.push(&[&refspec], None)?;
        Ok(())
    }

    fn current_branch(repo: &Repository) -> Result<String> {
        let head = repo.head().context("Failed to get HEAD")?;
        Ok(head
            .shorthand()
            .context("Failed to get branch name")?
            .to_string())
    }

    fn signature(repo: &Repository) -> Result<Signature<'static>> {
        let config = repo.config()?;
        let name = config
            .get_string("user.name")
            .unwrap_or_else(|_| "todo-mcp".to_string());
        let email = config
            .get_string("user.email")
            .unwrap_or_else(|_| "todo-mcp@localhost".to_string());

        match Signature::now(&name, &email) {
            Ok(sig) => Ok(sig),
            Err(_) => {
                let time = Time::new(1_700_000_000, 0);
                Signature::new(&name, &email, &time)
                    .context("Failed to create signature with fixed time")
            }
        }
    }
}
