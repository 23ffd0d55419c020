// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Hook manager for installing and managing git hooks.

use crate::error::{ClintError, HookError, Result};
use crate::git::{self, Repository};
use std::fs;
use std::path::{Path, PathBuf};

use super::templates::{HookTemplate, HOOK_MARKER};

/// Manager for git hooks.
pub struct HookManager {
    hooks_dir: PathBuf,
}

impl HookManager {
    /// Create a new hook manager for the current repository.
    pub fn new() -> Result<Self> {
        let repo = git::open_repo()?;
        Self::for_repo(&repo)
    }

    /// Create a hook manager for a given repository.
    pub fn for_repo(repo: &Repository) -> Result<Self> {
        let hooks_dir = repo.git_dir().join("hooks");

        // Ensure hooks directory exists
        if !hooks_dir.exists() {
            fs::create_dir_all(&hooks_dir).map_err(|e| {
                ClintError::Hook(HookError::InstallFailed {
                    hook: "all".to_string(),
                    message: format!("Failed to create hooks directory: {}", e),
                })
            })?;
        }

        Ok(Self { hooks_dir })
    }

    /// Directory the hooks are written to.
    pub fn hooks_dir(&self) -> &Path {
        &self.hooks_dir
    }

    /// Install a specific hook.
    pub fn install_hook(&self, hook_name: &str, force: bool) -> Result<()> {
        let template = parse_hook(hook_name)?;
        self.install_template(&template, force)
    }

    /// Install all hooks.
    pub fn install_all(&self, force: bool) -> Result<()> {
        for template in HookTemplate::all() {
            self.install_template(template, force)?;
        }
        Ok(())
    }

    /// Install a hook from a template.
    fn install_template(&self, template: &HookTemplate, force: bool) -> Result<()> {
        let hook = template.filename();
        let hook_path = self.hooks_dir.join(hook);
        let backup_path = self.hooks_dir.join(format!("{}.backup", hook));

        let install_error = |message: String| {
            ClintError::Hook(HookError::InstallFailed {
                hook: hook.to_string(),
                message,
            })
        };

        if hook_path.exists() && !self.is_clint_hook(&hook_path)? {
            if !force {
                return Err(ClintError::Hook(HookError::AlreadyExists {
                    hook: hook.to_string(),
                }));
            }

            if backup_path.exists() {
                return Err(install_error(format!(
                    "Backup {} already exists; move it away before forcing",
                    backup_path.display()
                )));
            }

            // Keep the foreign hook so uninstall can restore it
            fs::rename(&hook_path, &backup_path)
                .map_err(|e| install_error(format!("Failed to backup existing hook: {}", e)))?;
        }

        fs::write(&hook_path, template.generate())
            .map_err(|e| install_error(format!("Failed to write hook: {}", e)))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let mut perms = fs::metadata(&hook_path)
                .map_err(|e| install_error(format!("Failed to get permissions: {}", e)))?
                .permissions();
            perms.set_mode(0o755);
            fs::set_permissions(&hook_path, perms)
                .map_err(|e| install_error(format!("Failed to set permissions: {}", e)))?;
        }

        tracing::debug!("Installed {} hook at {:?}", hook, hook_path);
        Ok(())
    }

    /// Uninstall a specific hook.
    pub fn uninstall_hook(&self, hook_name: &str) -> Result<()> {
        let template = parse_hook(hook_name)?;

        let hook_path = self.hooks_dir.join(template.filename());
        let backup_path = self
            .hooks_dir
            .join(format!("{}.backup", template.filename()));

        if !hook_path.exists() {
            return Ok(()); // Nothing to uninstall
        }

        // Only remove if it's our hook
        if !self.is_clint_hook(&hook_path)? {
            return Err(ClintError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: "Hook was not installed by clint".to_string(),
            }));
        }

        fs::remove_file(&hook_path).map_err(|e| {
            ClintError::Hook(HookError::RemoveFailed {
                hook: hook_name.to_string(),
                message: format!("Failed to remove hook: {}", e),
            })
        })?;

        // Restore backup if exists
        if backup_path.exists() {
            fs::rename(&backup_path, &hook_path).map_err(|e| {
                ClintError::Hook(HookError::RemoveFailed {
                    hook: hook_name.to_string(),
                    message: format!("Failed to restore backup: {}", e),
                })
            })?;
        }

        Ok(())
    }

    /// Uninstall all hooks.
    pub fn uninstall_all(&self) -> Result<()> {
        for template in HookTemplate::all() {
            self.uninstall_hook(template.filename())?;
        }
        Ok(())
    }

    /// Get the status of all hooks.
    pub fn status(&self) -> Result<Vec<(String, bool)>> {
        let mut status = Vec::new();

        for template in HookTemplate::all() {
            let hook_path = self.hooks_dir.join(template.filename());
            let installed = hook_path.exists() && self.is_clint_hook(&hook_path)?;
            status.push((template.filename().to_string(), installed));
        }

        Ok(status)
    }

    /// Check if a hook was installed by clint.
    fn is_clint_hook(&self, path: &Path) -> Result<bool> {
        let content = fs::read_to_string(path)?;
        Ok(content.contains(HOOK_MARKER))
    }
}

fn parse_hook(hook_name: &str) -> Result<HookTemplate> {
    hook_name.parse::<HookTemplate>().map_err(|_| {
        ClintError::Hook(HookError::NotFound {
            hook: hook_name.to_string(),
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn manager() -> (TempDir, HookManager) {
        let dir = TempDir::new().unwrap();
        git2::Repository::init(dir.path()).unwrap();
        let repo = Repository::open(dir.path()).unwrap();
        let manager = HookManager::for_repo(&repo).unwrap();
        (dir, manager)
    }

    #[test]
    fn test_install_and_uninstall() {
        let (_dir, manager) = manager();
        manager.install_all(false).unwrap();
        assert_eq!(
            manager.status().unwrap(),
            vec![("commit-msg".to_string(), true)]
        );

        // Reinstalling our own hook needs no force
        manager.install_hook("commit-msg", false).unwrap();

        manager.uninstall_all().unwrap();
        assert_eq!(
            manager.status().unwrap(),
            vec![("commit-msg".to_string(), false)]
        );
    }

    #[test]
    fn test_foreign_hook_is_preserved() {
        let (_dir, manager) = manager();
        let hook_path = manager.hooks_dir().join("commit-msg");
        fs::write(&hook_path, "#!/bin/sh\nexit 0\n").unwrap();

        assert!(matches!(
            manager.install_hook("commit-msg", false),
            Err(ClintError::Hook(HookError::AlreadyExists { .. }))
        ));
        assert!(manager.uninstall_hook("commit-msg").is_err());

        manager.install_hook("commit-msg", true).unwrap();
        assert!(manager.hooks_dir().join("commit-msg.backup").exists());

        manager.uninstall_hook("commit-msg").unwrap();
        assert_eq!(
            fs::read_to_string(&hook_path).unwrap(),
            "#!/bin/sh\nexit 0\n"
        );
    }

    #[test]
    fn test_force_keeps_existing_backup() {
        let (_dir, manager) = manager();
        let hook_path = manager.hooks_dir().join("commit-msg");
        let backup_path = manager.hooks_dir().join("commit-msg.backup");
        fs::write(&backup_path, "#!/bin/sh\necho first\n").unwrap();
        fs::write(&hook_path, "#!/bin/sh\necho second\n").unwrap();

        assert!(matches!(
            manager.install_hook("commit-msg", true),
            Err(ClintError::Hook(HookError::InstallFailed { .. }))
        ));
        assert_eq!(
            fs::read_to_string(&backup_path).unwrap(),
            "#!/bin/sh\necho first\n"
        );
        assert_eq!(
            fs::read_to_string(&hook_path).unwrap(),
            "#!/bin/sh\necho second\n"
        );
    }

    #[test]
    fn test_unknown_hook() {
        let (_dir, manager) = manager();
        assert!(matches!(
            manager.install_hook("pre-push", false),
            Err(ClintError::Hook(HookError::NotFound { .. }))
        ));
    }
}
