//! Snapshot files written by the browser tool's backup export

use promptdesk_records::{
    BlockKey, ChangeType, Conclusion, ProjectStatus, RecordsError, Snapshot, StandardScope,
};
use std::fs;
use tempfile::TempDir;

const BACKUP_JSON: &str = r#"{
  "meta": {"schemaVersion": 3, "lastBackupAt": 1700000000000},
  "projects": [
    {
      "id": "proj_1",
      "name": "Shop admin",
      "category": "admin",
      "frontendStack": "Vue 3",
      "backendStack": "Spring Boot",
      "frontendFramework": "vue",
      "backendFramework": "springboot",
      "frontendLanguage": "ts",
      "backendLanguage": "java",
      "dbType": "mysql",
      "apiStyle": "rest",
      "contacts": [{"name": "Lin", "role": "backend"}],
      "status": "paused",
      "tags": ["internal"],
      "createdAt": 1,
      "updatedAt": 2
    }
  ],
  "modules": [
    {"id": "mod_1", "projectId": "proj_1", "name": "Orders",
     "relatedFiles": ["src/order.ts"], "relatedFields": [], "relatedApis": ["/api/orders"],
     "createdAt": 1, "updatedAt": 1}
  ],
  "standards": [
    {"id": "std_g", "projectId": "global", "title": "Reply in markdown", "tags": [],
     "summary": "", "scope": "prompting", "level": "must",
     "contentChunks": ["Use headings"], "createdAt": 1, "updatedAt": 1},
    {"id": "std_p", "projectId": "proj_1", "title": "Audit columns", "tags": [],
     "summary": "Every table has audit columns", "scope": "db", "level": "should",
     "appliesTo": {"dbTypes": ["MySQL"]},
     "rules": {"db": {"requireAuditColumns": true}},
     "checklistItems": ["create_time"], "contentChunks": [], "createdAt": 1, "updatedAt": 1}
  ],
  "changes": [
    {"id": "chg_1", "projectId": "proj_1", "title": "Orders table", "type": "create_table",
     "summaryItems": ["add orders"], "problemsSolvedItems": [],
     "affectedFiles": [], "affectedFields": ["orders.id"], "affectedApis": [],
     "dbChecklist": {"hasCreateTime": true, "hasUpdateTime": true,
                     "hasCreateBy": false, "hasUpdateBy": false,
                     "isJunctionTable": false, "notes": "by columns later"},
     "createdAt": 1, "updatedAt": 1}
  ],
  "tests": [
    {"id": "tst_1", "projectId": "proj_1", "title": "Checkout", "feedbackRaw": "broken\nagain",
     "conclusion": "fail", "followUpActions": ["fix it"], "createdAt": 1, "updatedAt": 1}
  ],
  "prompts": [
    {"id": "prm_1", "projectId": "proj_1", "title": "Review", "tags": [], "content": "v1",
     "revisions": [{"revId": "rev_1", "content": "v1", "reason": "first",
                    "expectedAvoid": "", "createdAt": 1}],
     "createdAt": 1, "updatedAt": 1}
  ],
  "templates": [
    {"id": "tpl_1", "projectId": "proj_1", "title": "Default",
     "blocks": [
       {"key": "background", "title": "1. Background", "enabled": true, "content": "Ship it"},
       {"key": "rollout", "title": "9. Rollout", "enabled": false, "content": ""}
     ],
     "createdAt": 1, "updatedAt": 1}
  ],
  "builds": []
}"#;

#[test]
fn test_load_json_backup() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("backup.json");
    fs::write(&path, BACKUP_JSON).unwrap();

    let snapshot = Snapshot::load(&path).unwrap();

    assert_eq!(snapshot.meta.as_ref().unwrap().schema_version, 3);
    let project = snapshot.project("proj_1").unwrap();
    assert_eq!(project.status, ProjectStatus::Paused);
    assert_eq!(project.db_type.as_deref(), Some("mysql"));
    assert_eq!(project.contacts[0].role.as_deref(), Some("backend"));

    let change = snapshot.change("chg_1").unwrap();
    assert_eq!(change.change_type, ChangeType::CreateTable);
    assert_eq!(
        change.db_checklist.as_ref().unwrap().notes.as_deref(),
        Some("by columns later")
    );

    assert_eq!(snapshot.test("tst_1").unwrap().conclusion, Conclusion::Fail);
    assert_eq!(snapshot.standard("std_p").unwrap().scope, Some(StandardScope::Db));
    assert!(snapshot.standard("std_p").unwrap().rules.is_some());

    let template = snapshot.template("tpl_1").unwrap();
    assert_eq!(template.blocks[0].key, BlockKey::Background);
    assert_eq!(template.blocks[1].key, BlockKey::Custom("rollout".to_string()));

    let global = snapshot.global_standards("global");
    assert_eq!(global.len(), 1);
    assert_eq!(global[0].id, "std_g");
}

#[test]
fn test_yaml_matches_json() {
    let from_json = Snapshot::from_json(BACKUP_JSON).unwrap();
    let yaml = serde_yaml::to_string(&from_json).unwrap();

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("backup.yml");
    fs::write(&path, yaml).unwrap();

    let from_yaml = Snapshot::load(&path).unwrap();
    assert_eq!(from_yaml, from_json);
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().unwrap();
    let err = Snapshot::load(&dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, RecordsError::FileNotFound { .. }));
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("backup.csv");
    fs::write(&path, "id,title").unwrap();

    let err = Snapshot::load(&path).unwrap_err();
    assert!(matches!(err, RecordsError::UnsupportedFormat { ref format } if format == "csv"));
}

#[test]
fn test_malformed_json() {
    let err = Snapshot::from_json("{\"projects\": 3}").unwrap_err();
    assert!(matches!(err, RecordsError::Json(_)));
}
