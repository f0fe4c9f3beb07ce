// src/generate.rs
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::CreateError;
use crate::templates::Framework;

/// Writes the project-level README and `.gitignore` into the project root.
pub fn generate_project_files(
  project_name: &str,
  project_path: &Path,
  framework: Framework,
) -> Result<(), CreateError> {
  let readme = render_readme(project_name, framework);
  let readme_path = project_path.join("README.md");
  debug!("Writing {}", readme_path.display());
  fs::write(&readme_path, readme).map_err(|e| CreateError::Generation { source: e })?;

  let gitignore = render_gitignore(framework);
  let gitignore_path = project_path.join(".gitignore");
  debug!("Writing {}", gitignore_path.display());
  fs::write(&gitignore_path, gitignore).map_err(|e| CreateError::Generation { source: e })?;

  Ok(())
}

fn render_readme(project_name: &str, framework: Framework) -> String {
  let mut readme = format!(
    "# {project_name}\n\n\
     A hybrid TAC dApp with a Next.js frontend{and_contracts} - powered by TAC\n\n\
     ## Project Structure\n\n\
     - Project root - Next.js frontend with TAC SDK integration\n",
    and_contracts = match framework {
      Framework::Hardhat => " and Hardhat smart contracts",
      Framework::Foundry => " and Foundry smart contracts",
      Framework::None => "",
    },
  );

  if framework != Framework::None {
    readme.push_str(&format!(
      "- `/contracts` - {framework} smart contracts for TAC\n"
    ));
  }

  readme.push_str(
    "\n## Getting Started\n\n\
     ### Frontend\n\n\
     ```bash\n\
     npm run dev\n\
     ```\n\n\
     Open [http://localhost:3000](http://localhost:3000) in your browser.\n",
  );

  match framework {
    Framework::Hardhat => readme.push_str(
      "\n### Contracts\n\n\
       ```bash\n\
       cd contracts\n\
       npx hardhat compile\n\
       npx hardhat run scripts/deploy.js --network tacTestnet\n\
       ```\n",
    ),
    Framework::Foundry => readme.push_str(
      "\n### Contracts\n\n\
       ```bash\n\
       cd contracts\n\
       forge build\n\
       forge script script/DeployMessage.s.sol --rpc-url tac_testnet --broadcast\n\
       ```\n",
    ),
    Framework::None => {}
  }

  readme.push_str(
    "\n## Learn More\n\n\
     - [TAC Documentation](https://docs.tac.build)\n\
     - [Next.js Documentation](https://nextjs.org/docs)\n",
  );
  match framework {
    Framework::Hardhat => {
      readme.push_str("- [Hardhat Documentation](https://hardhat.org/docs)\n");
    }
    Framework::Foundry => {
      readme.push_str("- [Foundry Book](https://book.getfoundry.sh)\n");
    }
    Framework::None => {}
  }

  readme
}

fn render_gitignore(framework: Framework) -> String {
  let mut gitignore = String::from(
    "# Dependencies\n\
     node_modules/\n\
     .pnp\n\
     .pnp.js\n\n\
     # Testing\n\
     coverage/\n\n\
     # Next.js\n\
     .next/\n\
     out/\n\
     build/\n\
     dist/\n\n\
     # Environment variables\n\
     .env\n\
     .env.local\n\
     .env.development.local\n\
     .env.test.local\n\
     .env.production.local\n\n\
     # Debug\n\
     npm-debug.log*\n\
     yarn-debug.log*\n\
     yarn-error.log*\n\n\
     # IDE\n\
     .vscode/\n\
     .idea/\n\
     *.swp\n\
     *.swo\n\n\
     # OS\n\
     .DS_Store\n\
     Thumbs.db\n",
  );

  // Compiled-artifact directories differ per framework.
  match framework {
    Framework::Hardhat => gitignore.push_str(
      "\n# Hardhat\n\
       contracts/artifacts/\n\
       contracts/cache/\n\
       contracts/typechain-types/\n",
    ),
    Framework::Foundry => gitignore.push_str(
      "\n# Foundry\n\
       contracts/out/\n\
       contracts/cache/\n",
    ),
    Framework::None => {}
  }

  gitignore
}
