//! Sample data for local development.

use color_eyre::eyre::{eyre, Result};

use crate::{
    domain::{
        Email, MemberId, MemberName, NewMember, NewProject, Pagination,
        ProjectTitle,
    },
    services::{database::Database, repository},
};

struct SampleMember {
    name: &'static str,
    email: &'static str,
    role: &'static str,
    bio: &'static str,
    github_username: &'static str,
    linkedin_url: Option<&'static str>,
}

struct SampleProject {
    title: &'static str,
    description: &'static str,
    status: &'static str,
    github_url: &'static str,
    demo_url: Option<&'static str>,
}

const SAMPLE_MEMBERS: [SampleMember; 3] = [
    SampleMember {
        name: "João Silva",
        email: "joao.silva@example.com",
        role: "Data Scientist",
        bio: "Especialista em Machine Learning e análise de dados",
        github_username: "joaosilva",
        linkedin_url: Some("https://linkedin.com/in/joaosilva"),
    },
    SampleMember {
        name: "Maria Santos",
        email: "maria.santos@example.com",
        role: "AI Engineer",
        bio: "Desenvolvedora focada em IA e Deep Learning",
        github_username: "mariasantos",
        linkedin_url: Some("https://linkedin.com/in/mariasantos"),
    },
    SampleMember {
        name: "Pedro Oliveira",
        email: "pedro.oliveira@example.com",
        role: "Research Assistant",
        bio: "Estudante de mestrado em Ciência da Computação",
        github_username: "pedrooliveira",
        linkedin_url: None,
    },
];

const SAMPLE_PROJECTS: [SampleProject; 3] = [
    SampleProject {
        title: "Sistema de Recomendação",
        description: "Sistema de recomendação usando algoritmos de machine learning",
        status: "active",
        github_url: "https://github.com/lamfo/recommendation-system",
        demo_url: Some("https://demo.lamfo.ai/recommendations"),
    },
    SampleProject {
        title: "Análise de Sentimentos",
        description: "Ferramenta para análise de sentimentos em redes sociais",
        status: "completed",
        github_url: "https://github.com/lamfo/sentiment-analysis",
        demo_url: None,
    },
    SampleProject {
        title: "Chatbot Inteligente",
        description: "Chatbot usando processamento de linguagem natural",
        status: "active",
        github_url: "https://github.com/lamfo/intelligent-chatbot",
        demo_url: None,
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { members: usize, projects: usize },
    /// Members already exist; nothing was written.
    Skipped,
}

/// Writes the sample members and projects in a single session. Projects are
/// staffed in rotation: the first gets the first two members, the second
/// the last two, the third everyone.
#[tracing::instrument(name = "Populating sample data", skip_all)]
pub async fn populate(database: &Database) -> Result<SeedOutcome> {
    let mut session = database.acquire_session().await?;

    let existing = repository::list_members(
        &mut session,
        Pagination::parse(None, Some(1))?,
    )
    .await?;
    if !existing.is_empty() {
        tracing::info!("Members already present, skipping sample data");
        return Ok(SeedOutcome::Skipped);
    }

    let mut member_ids: Vec<MemberId> = Vec::new();
    for sample in &SAMPLE_MEMBERS {
        let mut member = NewMember::new(
            MemberName::parse(sample.name.to_owned())?,
            Email::parse(sample.email.to_owned())?,
        );
        member.role = Some(sample.role.to_owned());
        member.bio = Some(sample.bio.to_owned());
        member.github_username = Some(sample.github_username.to_owned());
        member.linkedin_url = sample.linkedin_url.map(str::to_owned);
        member_ids.push(repository::create_member(&mut session, member).await?.id);
    }

    let staffing = [
        member_ids[..2].to_vec(),
        member_ids[1..].to_vec(),
        member_ids.clone(),
    ];
    for (sample, staff) in SAMPLE_PROJECTS.iter().zip(staffing) {
        let mut project =
            NewProject::new(ProjectTitle::parse(sample.title.to_owned())?);
        project.description = Some(sample.description.to_owned());
        project.status = Some(sample.status.to_owned());
        project.github_url = Some(sample.github_url.to_owned());
        project.demo_url = sample.demo_url.map(str::to_owned);
        project.member_ids = staff;
        repository::create_project(&mut session, project).await?;
    }

    session
        .commit()
        .await
        .map_err(|e| eyre!(e).wrap_err("Failed to commit sample data"))?;

    Ok(SeedOutcome::Seeded {
        members: SAMPLE_MEMBERS.len(),
        projects: SAMPLE_PROJECTS.len(),
    })
}
